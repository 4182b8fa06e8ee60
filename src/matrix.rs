use super::num::{Float, FloatOps, Number, SignedNumber};
use super::{Error, Quaternion, Result, is_zero};
use std::fmt;
use std::ops::{Mul, MulAssign, Index, IndexMut, Add, AddAssign, Div, DivAssign, Sub, SubAssign, Neg};

/// Row-major `R`x`C` matrix. Element `(row, col)` lives at `data[row][col]`.
///
/// Single-column matrices double as vectors, see [`Vector`].
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Matrix<T, const R: usize, const C: usize> {
	pub data: [[T; C]; R],
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
	pub const ZERO: Self = Self::splat(T::ZERO);
	pub const ONE: Self = Self::splat(T::ONE);

	pub const fn splat(value: T) -> Self {
		Self { data: [[value; C]; R] }
	}

	/// Reads `R * C` values in row-major order.
	pub fn from_slice(values: &[T]) -> Self {
		let mut result = Self::ZERO;
		result.as_mut_slice().copy_from_slice(&values[..R * C]);
		result
	}
}

/// Square matrices default to the identity, vectors and other shapes to zero.
impl<T: Number, const R: usize, const C: usize> Default for Matrix<T, R, C> {
	fn default() -> Self {
		let mut result = Self::ZERO;
		if C > 1 && R == C {
			for i in 0..R {
				result.data[i][i] = T::ONE;
			}
		}
		result
	}
}

pub type Vector<T, const R: usize> = Matrix<T, R, 1>;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type Matrix2<T> = Matrix<T, 2, 2>;
pub type Matrix4<T> = Matrix<T, 4, 4>;

impl<T: Number> Vector2<T> {
	pub const X: Self = Self::new(T::ONE, T::ZERO);
	pub const Y: Self = Self::new(T::ZERO, T::ONE);

	pub const fn new(x: T, y: T) -> Self {
		Self { data: [[x], [y]] }
	}

	pub fn extend(&self, z: T) -> Vector3<T> {
		Vector3::new(self.x, self.y, z)
	}

	/// The z component of the 3D cross product of the two vectors.
	pub fn cross(&self, rhs: Self) -> T {
		self.x * rhs.y - self.y * rhs.x
	}
}

impl<T: Number> Vector3<T> {
	pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
	pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
	pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

	pub const fn new(x: T, y: T, z: T) -> Self {
		Self { data: [[x], [y], [z]] }
	}

	pub fn truncate(&self) -> Vector2<T> {
		Vector2::new(self.x, self.y)
	}

	pub fn extend(&self, w: T) -> Vector4<T> {
		Vector4::new(self.x, self.y, self.z, w)
	}

	pub fn cross(&self, rhs: Self) -> Self {
		Self::new(
			self.y * rhs.z - self.z * rhs.y,
			self.z * rhs.x - self.x * rhs.z,
			self.x * rhs.y - self.y * rhs.x,
		)
	}
}

impl<T: Number> Vector4<T> {
	pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
	pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
	pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
	pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

	pub const fn new(x: T, y: T, z: T, w: T) -> Self {
		Self { data: [[x], [y], [z], [w]] }
	}

	pub fn from_vec3(xyz: Vector3<T>, w: T) -> Self {
		xyz.extend(w)
	}

	pub fn truncate(&self) -> Vector3<T> {
		Vector3::new(self.x, self.y, self.z)
	}
}

impl<T: Number, const N: usize> Vector<T, N> {
	pub fn to_array(&self) -> [T; N] {
		std::array::from_fn(|i| self.data[i][0])
	}

	pub fn dot(&self, rhs: Self) -> T {
		let mut result = T::ZERO;
		for i in 0..N {
			result += self[i] * rhs[i];
		}
		result
	}

	pub fn length_sq(&self) -> T {
		self.dot(*self)
	}

	/// Whether every component is within the zero tolerance, see [`crate::is_zero`].
	pub fn is_null(&self) -> bool {
		self.as_slice().iter().all(|&v| is_zero(v))
	}

	pub fn lerp(&self, rhs: Self, t: T) -> Self {
		*self + (rhs - *self) * t
	}
}

impl<T: Float + FloatOps, const N: usize> Vector<T, N> {
	pub fn length(&self) -> T {
		self.length_sq().sqrt()
	}

	pub fn distance(&self, rhs: Self) -> T {
		(*self - rhs).length()
	}

	/// Scales this vector to unit length in place and returns the length it had.
	///
	/// Nothing guards the zero vector: it divides by zero and fills the vector
	/// with NaN. Check [`Self::is_null`] first, or use [`Self::try_normalize`].
	pub fn normalize(&mut self) -> T {
		let length = self.length();
		*self *= T::ONE / length;
		length
	}

	/// Returns a unit length copy of this vector, see [`Self::normalize`].
	pub fn normalized(&self) -> Self {
		let mut result = *self;
		result.normalize();
		result
	}

	/// Like [`Self::normalize`], but leaves null vectors untouched and reports them.
	pub fn try_normalize(&mut self) -> Result<T> {
		if self.is_null() {
			log::debug!(target: "starmath", "refusing to normalize null vector {:?}", self.as_slice());
			return Err(Error::ZeroLength);
		}
		Ok(self.normalize())
	}
}

impl<T: Number, const N: usize> From<[T; N]> for Vector<T, N> {
	fn from(values: [T; N]) -> Self {
		Self { data: values.map(|v| [v]) }
	}
}

impl<T: Number, const R: usize, const C: usize, const CR: usize> Mul<Matrix<T, CR, C>> for Matrix<T, R, CR> {
	type Output = Matrix<T, R, C>;

	/// Standard product: `result(row, col)` accumulates `self(row, i) * rhs(i, col)`.
	fn mul(self, rhs: Matrix<T, CR, C>) -> Self::Output {
		let mut result = Matrix::ZERO;
		for row in 0..R {
			for col in 0..C {
				for i in 0..CR {
					result[(row, col)] += self[(row, i)] * rhs[(i, col)];
				}
			}
		}
		result
	}
}

impl<T: Number, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
	fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
		*self = *self * rhs;
	}
}

impl<T: Number, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
	fn mul_assign(&mut self, rhs: T) {
		for i in 0..(R * C) {
			self[i] *= rhs;
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
	type Output = Self;

	fn mul(self, rhs: T) -> Self::Output {
		let mut result = self;
		result *= rhs;
		result
	}
}

macro_rules! scalar_mul_impl {
	($($t:ident),*) => {$(
		impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
			type Output = Matrix<$t, R, C>;

			fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
				rhs * self
			}
		}
	)*}
}

scalar_mul_impl!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);

impl<T: Number, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
	fn div_assign(&mut self, rhs: T) {
		for i in 0..(R * C) {
			self[i] /= rhs;
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
	type Output = Self;

	fn div(self, rhs: T) -> Self::Output {
		let mut result = self;
		result /= rhs;
		result
	}
}

impl<T: Number, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
	fn add_assign(&mut self, rhs: Self) {
		for i in 0..(R * C) {
			self[i] += rhs[i];
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Add for Matrix<T, R, C> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result += rhs;
		result
	}
}

impl<T: Number, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
	fn sub_assign(&mut self, rhs: Self) {
		for i in 0..(R * C) {
			self[i] -= rhs[i];
		}
	}
}

impl<T: Number, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result -= rhs;
		result
	}
}

impl<T: SignedNumber, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
	type Output = Self;

	fn neg(self) -> Self::Output {
		let mut result = Matrix::ZERO;
		for i in 0..(R * C) {
			result[i] = -self[i];
		}
		result
	}
}

/// Vectors compare within the zero tolerance per component, like other
/// geometric quantities. Matrices compare their memory bitwise, so `-0.0`
/// differs from `0.0` and a NaN element equals the same NaN.
impl<T: Number, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
	fn eq(&self, rhs: &Self) -> bool {
		if C == 1 {
			self.as_slice().iter().zip(rhs.as_slice()).all(|(&a, &b)| {
				is_zero(if a > b { a - b } else { b - a })
			})
		} else {
			self.as_slice().iter().zip(rhs.as_slice()).all(|(&a, &b)| a.bitwise_eq(b))
		}
	}
}

#[repr(C)]
pub struct XY<T> {
	pub x: T,
	pub y: T,
}

#[repr(C)]
pub struct XYZ<T> {
	pub x: T,
	pub y: T,
	pub z: T,
}

#[repr(C)]
pub struct XYZW<T> {
	pub x: T,
	pub y: T,
	pub z: T,
	pub w: T,
}

// The views below reinterpret `[[T; 1]; N]`, which has the same layout as N
// consecutive `T` fields of a `#[repr(C)]` struct.

impl<T> std::ops::Deref for Vector2<T> {
	type Target = XY<T>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		unsafe { &*(self as *const Self as *const Self::Target) }
	}
}

impl<T> std::ops::DerefMut for Vector2<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *(self as *mut Self as *mut Self::Target) }
	}
}

impl<T> std::ops::Deref for Vector3<T> {
	type Target = XYZ<T>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		unsafe { &*(self as *const Self as *const Self::Target) }
	}
}

impl<T> std::ops::DerefMut for Vector3<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *(self as *mut Self as *mut Self::Target) }
	}
}

impl<T> std::ops::Deref for Vector4<T> {
	type Target = XYZW<T>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		unsafe { &*(self as *const Self as *const Self::Target) }
	}
}

impl<T> std::ops::DerefMut for Vector4<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *(self as *mut Self as *mut Self::Target) }
	}
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.as_slice()[index]
	}
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.as_mut_slice()[index]
	}
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
	type Output = T;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		&self.data[index.0][index.1]
	}
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		&mut self.data[index.0][index.1]
	}
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
	/// All elements in row-major order, without padding.
	pub fn as_slice(&self) -> &[T] {
		self.data.as_flattened()
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		self.data.as_flattened_mut()
	}
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
	pub fn transpose(&self) -> Matrix<T, C, R> {
		let mut result = Matrix::ZERO;
		for row in 0..R {
			for col in 0..C {
				result[(col, row)] = self[(row, col)];
			}
		}
		result
	}
}

impl<T: Number> Matrix2<T> {
	pub const IDENTITY: Self = Self {
		data: [
			[T::ONE, T::ZERO],
			[T::ZERO, T::ONE],
		]
	};

	/// Creates a matrix from an array of 4 elements stored in row-major order.
	pub const fn from_array(array: [T; 4]) -> Self {
		Self { data: [
			[array[0], array[1]],
			[array[2], array[3]],
		]}
	}

	pub fn to_identity(&mut self) {
		*self = Self::IDENTITY;
	}

	/// Sum of the diagonal.
	pub fn trace(&self) -> T {
		self.data[0][0] + self.data[1][1]
	}
}

impl<T: SignedNumber> Matrix2<T> {
	pub fn determinant(&self) -> T {
		let m = |r: usize, c: usize| self.data[r][c];

		m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)
	}
}

impl<T: Float + FloatOps> Matrix2<T> {
	pub fn frobenius_norm(&self) -> T {
		self.as_slice().iter().fold(T::ZERO, |sum, &v| sum + v * v).sqrt()
	}

	/// Returns the inverse of this matrix.
	/// The matrix must be invertible, this is not checked.
	pub fn inverse(&self) -> Self {
		self.inverse_with_det().0
	}

	/// Returns the inverse of this matrix together with the determinant used to compute it.
	pub fn inverse_with_det(&self) -> (Self, T) {
		let m = |r: usize, c: usize| self.data[r][c];

		let det = self.determinant();
		let adjugate = Self::from_array([
			m(1, 1), -m(0, 1),
			-m(1, 0), m(0, 0),
		]);

		(adjugate * (T::ONE / det), det)
	}

	/// Returns the inverse of this matrix, or an error if its determinant is zero.
	pub fn try_inverse(&self) -> Result<Self> {
		let (inverse, det) = self.inverse_with_det();
		check_invertible(det)?;
		Ok(inverse)
	}
}

impl<T: Number> Matrix4<T> {
	pub const IDENTITY: Self = Self {
		data: [
			[T::ONE, T::ZERO, T::ZERO, T::ZERO],
			[T::ZERO, T::ONE, T::ZERO, T::ZERO],
			[T::ZERO, T::ZERO, T::ONE, T::ZERO],
			[T::ZERO, T::ZERO, T::ZERO, T::ONE],
		]
	};

	/// Creates a matrix from an array of 16 elements stored in row-major order.
	/// This allows the code to be formatted as if it were a 4x4 matrix.
	pub const fn from_array(array: [T; 16]) -> Self {
		Self { data: [
			[array[ 0], array[ 1], array[ 2], array[ 3]],
			[array[ 4], array[ 5], array[ 6], array[ 7]],
			[array[ 8], array[ 9], array[10], array[11]],
			[array[12], array[13], array[14], array[15]],
		]}
	}

	pub fn to_identity(&mut self) {
		*self = Self::IDENTITY;
	}

	pub fn from_translation(translation: Vector3<T>) -> Self {
		let (o, i) = (T::ZERO, T::ONE);
		let t = translation;

		Self::from_array([
			i, o, o, t.x,
			o, i, o, t.y,
			o, o, i, t.z,
			o, o, o, i,
		])
	}

	pub fn from_scaling(scale: Vector3<T>) -> Self {
		let (o, i) = (T::ZERO, T::ONE);
		let s = scale;

		Self::from_array([
			s.x, o, o, o,
			o, s.y, o, o,
			o, o, s.z, o,
			o, o, o, i,
		])
	}

	/// Overwrites this matrix with a translation. Previous contents are discarded.
	pub fn make_translation(&mut self, translation: Vector3<T>) {
		*self = Self::from_translation(translation);
	}

	/// Overwrites this matrix with a scaling. Previous contents are discarded.
	pub fn make_scaling(&mut self, scale: Vector3<T>) {
		*self = Self::from_scaling(scale);
	}
}

impl<T: SignedNumber> Matrix4<T> {
	/// Determinant of the 3x3 submatrix made of rows `r0, r1, r2` and columns `c0, c1, c2`.
	pub fn minor(&self, r0: usize, r1: usize, r2: usize, c0: usize, c1: usize, c2: usize) -> T {
		let m = |r: usize, c: usize| self.data[r][c];

		m(r0, c0) * (m(r1, c1) * m(r2, c2) - m(r1, c2) * m(r2, c1)) -
		m(r0, c1) * (m(r1, c0) * m(r2, c2) - m(r2, c0) * m(r1, c2)) +
		m(r0, c2) * (m(r1, c0) * m(r2, c1) - m(r2, c0) * m(r1, c1))
	}

	/// Returns the determinant of this matrix, expanding along the first row.
	///
	/// No pivoting is done, so near-singular matrices lose precision.
	pub fn determinant(&self) -> T {
		let m = |c: usize| self.data[0][c];

		m(0) * self.minor(1, 2, 3, 1, 2, 3) -
		m(1) * self.minor(1, 2, 3, 0, 2, 3) +
		m(2) * self.minor(1, 2, 3, 0, 1, 3) -
		m(3) * self.minor(1, 2, 3, 0, 1, 2)
	}

	/// Returns the adjugate: the transpose of the cofactor matrix.
	pub fn adjoint(&self) -> Self {
		Self::from_array([
			 self.minor(1, 2, 3, 1, 2, 3), -self.minor(0, 2, 3, 1, 2, 3),  self.minor(0, 1, 3, 1, 2, 3), -self.minor(0, 1, 2, 1, 2, 3),
			-self.minor(1, 2, 3, 0, 2, 3),  self.minor(0, 2, 3, 0, 2, 3), -self.minor(0, 1, 3, 0, 2, 3),  self.minor(0, 1, 2, 0, 2, 3),
			 self.minor(1, 2, 3, 0, 1, 3), -self.minor(0, 2, 3, 0, 1, 3),  self.minor(0, 1, 3, 0, 1, 3), -self.minor(0, 1, 2, 0, 1, 3),
			-self.minor(1, 2, 3, 0, 1, 2),  self.minor(0, 2, 3, 0, 1, 2), -self.minor(0, 1, 3, 0, 1, 2),  self.minor(0, 1, 2, 0, 1, 2),
		])
	}
}

impl<T: Float + FloatOps> Matrix4<T> {
	/// Returns the inverse of this matrix.
	///
	/// The matrix must be invertible, this is not checked: a zero determinant
	/// fills the result with infinities and NaN.
	pub fn inverse(&self) -> Self {
		self.inverse_with_det().0
	}

	/// Returns the inverse of this matrix together with the determinant used to compute it.
	pub fn inverse_with_det(&self) -> (Self, T) {
		let det = self.determinant();
		(self.adjoint() * (T::ONE / det), det)
	}

	/// Returns the inverse of this matrix, or an error if its determinant is zero.
	pub fn try_inverse(&self) -> Result<Self> {
		let (inverse, det) = self.inverse_with_det();
		check_invertible(det)?;
		Ok(inverse)
	}

	/// Creates a rotation of `angle` radians around `axis`, which must be unit length.
	pub fn from_rotation_axis(axis: Vector3<T>, angle: T) -> Self {
		Quaternion::from_axis_angle(axis, angle).to_rotation_matrix()
	}

	/// Overwrites this matrix with a rotation. Previous contents are discarded.
	pub fn make_rotation_axis(&mut self, axis: Vector3<T>, angle: T) {
		*self = Self::from_rotation_axis(axis, angle);
	}
}

fn check_invertible<T: Float + FloatOps>(det: T) -> Result<()> {
	if is_zero(det) || !det.is_finite() {
		log::debug!(target: "starmath", "matrix is not invertible, determinant is {:?}", det);
		return Err(Error::Singular { determinant: det.as_f64() });
	}
	Ok(())
}

impl<T: Number> Mul<Vector3<T>> for Matrix4<T> {
	type Output = Vector3<T>;

	/// Transforms `rhs` as a point (`w = 1`), without a perspective divide.
	fn mul(self, rhs: Vector3<T>) -> Self::Output {
		let m = |r: usize, c: usize| self.data[r][c];
		let v = rhs;

		Vector3::new(
			m(0, 0) * v.x + m(0, 1) * v.y + m(0, 2) * v.z + m(0, 3),
			m(1, 0) * v.x + m(1, 1) * v.y + m(1, 2) * v.z + m(1, 3),
			m(2, 0) * v.x + m(2, 1) * v.y + m(2, 2) * v.z + m(2, 3),
		)
	}
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
	/// Vectors print as `(x, y, z)`, matrices as one `[ a b c ]` line per row.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if C == 1 {
			write!(f, "(")?;
			for (i, row) in self.data.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "{}", row[0])?;
			}
			return write!(f, ")");
		}

		for row in &self.data {
			write!(f, "[ ")?;
			for value in row {
				write!(f, "{} ", value)?;
			}
			writeln!(f, "]")?;
		}
		Ok(())
	}
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}
