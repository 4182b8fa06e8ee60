use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::matrix::{Matrix4, Vector3};
use super::num::{Float, FloatOps, Number, NumberOps, SignedNumber, cast};
use super::{Error, Result, clamp, is_zero};

/// A quaternion `xi + yj + zk + w`.
///
/// Rotations are represented by unit quaternions, with `w = cos(angle / 2)`
/// and `(x, y, z) = sin(angle / 2) * axis`. Nothing enforces unit length:
/// arithmetic may leave it, and the rotation helpers assume it.
///
/// Equality is exact, use [`Quaternion::approx_eq`] for a tolerance.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<T> {
	pub x: T,
	pub y: T,
	pub z: T,
	pub w: T,
}

impl<T: Number> Quaternion<T> {
	/// A quaternions multiplicative identity.
	pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

	pub const fn new(x: T, y: T, z: T, w: T) -> Self {
		Self { x, y, z, w }
	}

	/// Reads `x, y, z, w` from the first four values.
	pub fn from_slice(values: &[T]) -> Self {
		Self::new(values[0], values[1], values[2], values[3])
	}

	/// Constructs a pure quaternion.
	pub fn from_imag(imag: Vector3<T>) -> Self {
		Self::new(imag.x, imag.y, imag.z, T::ZERO)
	}

	/// Constructs a quaternion from its real/scalar and imaginary/vector parts.
	pub fn from_parts(real: T, imag: Vector3<T>) -> Self {
		Self::new(imag.x, imag.y, imag.z, real)
	}

	/// The real/scalar part `w` of this quaternion.
	pub fn real(&self) -> T {
		self.w
	}

	/// The imaginary/vector part `(x, y, z)` of this quaternion.
	pub fn imag(&self) -> Vector3<T> {
		Vector3::new(self.x, self.y, self.z)
	}

	pub fn to_identity(&mut self) {
		*self = Self::IDENTITY;
	}

	pub fn dot(&self, rhs: Self) -> T {
		self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
	}

	/// Returns the squared norm, the sum of the squared components.
	/// See [`Quaternion::length`] for its square root.
	pub fn norm(&self) -> T {
		self.dot(*self)
	}

	/// The components in `x, y, z, w` order.
	pub fn to_array(&self) -> [T; 4] {
		[self.x, self.y, self.z, self.w]
	}

	pub fn as_slice(&self) -> &[T] {
		// `#[repr(C)]` with four fields of the same type has no padding.
		unsafe { std::slice::from_raw_parts(self as *const Self as *const T, 4) }
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe { std::slice::from_raw_parts_mut(self as *mut Self as *mut T, 4) }
	}
}

impl<T: SignedNumber> Quaternion<T> {
	/// Returns the conjugate of this quaternion.
	pub fn conjugate(&self) -> Self {
		Self::new(-self.x, -self.y, -self.z, self.w)
	}
}

impl<T: Float + FloatOps> Quaternion<T> {
	/// Returns the length (L2 norm) of this quaternion.
	pub fn length(&self) -> T {
		self.norm().sqrt()
	}

	/// Returns a unit length copy of this quaternion.
	pub fn normalized(&self) -> Self {
		*self / self.length()
	}

	/// Returns the inverse of this quaternion. Valid for any non-zero quaternion.
	pub fn inverse(&self) -> Self {
		self.conjugate() / self.norm()
	}

	/// Returns the inverse, or an error for the zero quaternion.
	pub fn try_inverse(&self) -> Result<Self> {
		if is_zero(self.norm()) {
			log::debug!(target: "starmath", "zero quaternion {:?} has no inverse", self);
			return Err(Error::ZeroQuaternion);
		}
		Ok(self.inverse())
	}

	/// Returns the inverse of a unit quaternion, which is its conjugate.
	///
	/// This quaternion must have unit length; debug builds assert it.
	pub fn inverse_unit(&self) -> Self {
		debug_assert!(
			self.norm().approx(T::ONE, cast(1e-3)),
			"inverse_unit on non-unit quaternion {:?}", self,
		);
		self.conjugate()
	}

	/// Creates a rotation of `angle` radians around `axis`.
	///
	/// The axis is not normalized: pass a unit vector, or the result is not a
	/// unit quaternion. A null axis is asserted against in debug builds.
	pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
		debug_assert!(!axis.is_null(), "rotation axis must not be null");
		let (sin, cos) = (angle / T::TWO).sin_cos();
		Self::from_parts(cos, axis * sin)
	}

	/// Like [`Quaternion::from_axis_angle`], but rejects a null axis.
	pub fn try_from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self> {
		if axis.is_null() {
			log::debug!(target: "starmath", "null rotation axis {:?}", axis.as_slice());
			return Err(Error::ZeroLength);
		}
		Ok(Self::from_axis_angle(axis, angle))
	}

	/// Returns the rotation axis and angle in [0, 2pi].
	///
	/// Without rotation the axis is undefined, `(X, 0)` is returned instead.
	pub fn to_axis_angle(&self) -> (Vector3<T>, T) where T: NumberOps {
		let imag = self.imag();
		let length = imag.length();

		if is_zero(length) {
			return (Vector3::X, T::ZERO);
		}

		let angle = T::TWO * clamp(self.w, T::MINUS_ONE, T::ONE).acos();
		(imag / length, angle)
	}

	/// Converts this unit quaternion to a rotation matrix.
	/// The last row and column are those of the identity.
	pub fn to_rotation_matrix(&self) -> Matrix4<T> {
		let (o, i) = (T::ZERO, T::ONE);

		let x2 = self.x + self.x;
		let y2 = self.y + self.y;
		let z2 = self.z + self.z;
		let x2w = x2 * self.w;
		let y2w = y2 * self.w;
		let z2w = z2 * self.w;
		let x2x = x2 * self.x;
		let y2x = y2 * self.x;
		let z2x = z2 * self.x;
		let y2y = y2 * self.y;
		let z2y = z2 * self.y;
		let z2z = z2 * self.z;

		Matrix4::from_array([
			i - (y2y + z2z), y2x - z2w, z2x + y2w, o,
			y2x + z2w, i - (x2x + z2z), z2y - x2w, o,
			z2x - y2w, z2y + x2w, i - (x2x + y2y), o,
			o, o, o, i,
		])
	}

	/// Extracts the rotation from the upper 3x3 block of `m`, which must be orthonormal.
	pub fn from_rotation_matrix(m: &Matrix4<T>) -> Self {
		let m = |r: usize, c: usize| m.data[r][c];
		let quarter = cast::<f64, T>(0.25);

		let trace = m(0, 0) + m(1, 1) + m(2, 2);

		let q = if trace > T::ZERO {
			let s = T::TWO * (trace + T::ONE).sqrt();
			Self::new(
				(m(2, 1) - m(1, 2)) / s,
				(m(0, 2) - m(2, 0)) / s,
				(m(1, 0) - m(0, 1)) / s,
				quarter * s,
			)
		} else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
			let s = T::TWO * (T::ONE + m(0, 0) - m(1, 1) - m(2, 2)).sqrt();
			Self::new(
				quarter * s,
				(m(0, 1) + m(1, 0)) / s,
				(m(0, 2) + m(2, 0)) / s,
				(m(2, 1) - m(1, 2)) / s,
			)
		} else if m(1, 1) > m(2, 2) {
			let s = T::TWO * (T::ONE + m(1, 1) - m(0, 0) - m(2, 2)).sqrt();
			Self::new(
				(m(0, 1) + m(1, 0)) / s,
				quarter * s,
				(m(1, 2) + m(2, 1)) / s,
				(m(0, 2) - m(2, 0)) / s,
			)
		} else {
			let s = T::TWO * (T::ONE + m(2, 2) - m(0, 0) - m(1, 1)).sqrt();
			Self::new(
				(m(0, 2) + m(2, 0)) / s,
				(m(1, 2) + m(2, 1)) / s,
				quarter * s,
				(m(1, 0) - m(0, 1)) / s,
			)
		};

		q.normalized()
	}

	/// Rotates `v` by this unit quaternion, computing `q * v * q^-1`.
	pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
		(*self * Self::from_imag(v) * self.inverse_unit()).imag()
	}

	/// Whether every component differs by less than `eps`.
	pub fn approx_eq(&self, rhs: Self, eps: T) -> bool {
		self.x.approx(rhs.x, eps) &&
		self.y.approx(rhs.y, eps) &&
		self.z.approx(rhs.z, eps) &&
		self.w.approx(rhs.w, eps)
	}
}

impl<T: Number> From<[T; 4]> for Quaternion<T> {
	fn from(values: [T; 4]) -> Self {
		let [x, y, z, w] = values;
		Self::new(x, y, z, w)
	}
}

impl<T: Number> Index<usize> for Quaternion<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.as_slice()[index]
	}
}

impl<T: Number> IndexMut<usize> for Quaternion<T> {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.as_mut_slice()[index]
	}
}

impl<T: Add<Output=T>> Add for Quaternion<T> {
	type Output = Quaternion<T>;

	fn add(self, rhs: Self) -> Self::Output {
		Self {
			x: self.x + rhs.x,
			y: self.y + rhs.y,
			z: self.z + rhs.z,
			w: self.w + rhs.w,
		}
	}
}

impl<T: Copy + Add<Output=T>> AddAssign for Quaternion<T> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<T: Sub<Output=T>> Sub for Quaternion<T> {
	type Output = Quaternion<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self {
			x: self.x - rhs.x,
			y: self.y - rhs.y,
			z: self.z - rhs.z,
			w: self.w - rhs.w,
		}
	}
}

impl<T: Copy + Sub<Output=T>> SubAssign for Quaternion<T> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<T: Neg<Output=T>> Neg for Quaternion<T> {
	type Output = Quaternion<T>;

	fn neg(self) -> Self::Output {
		Self {
			x: -self.x,
			y: -self.y,
			z: -self.z,
			w: -self.w,
		}
	}
}

impl<T: Copy + Mul<Output=T>> Mul<T> for Quaternion<T> {
	type Output = Quaternion<T>;

	fn mul(self, rhs: T) -> Self::Output {
		Self {
			x: self.x * rhs,
			y: self.y * rhs,
			z: self.z * rhs,
			w: self.w * rhs,
		}
	}
}

impl<T: Copy + Mul<Output=T>> MulAssign<T> for Quaternion<T> {
	fn mul_assign(&mut self, rhs: T) {
		*self = *self * rhs;
	}
}

impl<T: Copy + Div<Output=T>> Div<T> for Quaternion<T> {
	type Output = Quaternion<T>;

	fn div(self, rhs: T) -> Self::Output {
		Self {
			x: self.x / rhs,
			y: self.y / rhs,
			z: self.z / rhs,
			w: self.w / rhs,
		}
	}
}

impl<T: Copy + Div<Output=T>> DivAssign<T> for Quaternion<T> {
	fn div_assign(&mut self, rhs: T) {
		*self = *self / rhs;
	}
}

impl<T: SignedNumber> Mul<Quaternion<T>> for Quaternion<T> {
	type Output = Quaternion<T>;

	/// Hamilton product. Not commutative: `a * b` rotates by `b` first, then by `a`.
	fn mul(self, rhs: Quaternion<T>) -> Self::Output {
		Self {
			x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
			y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
			z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
			w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
		}
	}
}

impl<T: SignedNumber> MulAssign<Quaternion<T>> for Quaternion<T> {
	fn mul_assign(&mut self, rhs: Quaternion<T>) {
		*self = *self * rhs;
	}
}

macro_rules! scalar_mul_impl {
	($($t:ident),*) => {$(
		impl Mul<Quaternion<$t>> for $t {
			type Output = Quaternion<$t>;

			fn mul(self, rhs: Quaternion<$t>) -> Self::Output {
				rhs * self
			}
		}
	)*}
}

scalar_mul_impl!(f32, f64);

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
	}
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}
