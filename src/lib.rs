//! Small generic linear algebra for real-time graphics and simulation.
//!
//! Vectors are single-column [`Matrix`] values, so the same storage and
//! arithmetic serves `Vec3` and `Mat4` alike. Every type is a plain `Copy`
//! value; hot-path operations are unchecked and only assert their
//! preconditions in debug builds. Checked `try_*` variants exist where a
//! caller wants an [`Error`] instead.

pub mod matrix;
pub mod num;
pub mod primitives;

mod error;
mod quaternion;

use num::{Float, FloatOps, Integer, Number, NumberOps, cast};

pub use error::{Error, Result};
pub use matrix::{Matrix, Matrix2, Matrix4, Vector, Vector2, Vector3, Vector4};
pub use primitives::{Aabb, Plane};
pub use quaternion::Quaternion;

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

pub type Mat2 = Matrix2<f32>;
pub type Mat4 = Matrix4<f32>;

pub type Quat = Quaternion<f32>;

pub type DVec3 = Vector3<f64>;
pub type DMat4 = Matrix4<f64>;
pub type DQuat = Quaternion<f64>;

pub const PI: f32 = std::f32::consts::PI;

/// Whether `x` lies within the machine epsilon of its type around zero.
///
/// The tolerance is absolute, so this is only meaningful for values of modest
/// magnitude. For integers it is an exact test.
pub fn is_zero<T: Number>(x: T) -> bool {
	x <= T::EPSILON && T::ZERO <= x + T::EPSILON
}

/// Clamps x to be in the range [min, max].
pub fn clamp<T: Number + NumberOps>(x: T, min: T, max: T) -> T {
	T::min(T::max(x, min), max)
}

/// Linearly interpolates from `a` to `b`, `t = 0` giving `a`.
pub fn lerp<T: Number>(a: T, b: T, t: T) -> T {
	a + t * (b - a)
}

pub fn deg_to_rad<T: Float>(degrees: T) -> T {
	degrees * T::PI / cast(180.0)
}

pub fn rad_to_deg<T: Float>(radians: T) -> T {
	radians * cast(180.0) / T::PI
}

/// Unnormalized sinc, `sin(x) / x` with the removable singularity at 0 filled in.
pub fn sinc<T: Float + FloatOps>(x: T) -> T {
	if x.abs() < T::EPSILON {
		return T::ONE;
	}
	x.sin() / x
}

/// Lanczos windowed sinc kernel with a support of 2.
pub fn lanczos2<T: Float + FloatOps>(x: T) -> T {
	lanczos(x, T::TWO)
}

/// Lanczos windowed sinc kernel with a support of 3.
pub fn lanczos3<T: Float + FloatOps>(x: T) -> T {
	lanczos(x, cast(3.0))
}

fn lanczos<T: Float + FloatOps>(x: T, a: T) -> T {
	if x.abs() >= a {
		return T::ZERO;
	}
	sinc(T::PI * x) * sinc(T::PI * x / a)
}

/// Integer division rounding towards positive infinity.
pub fn up_div<T: Integer>(a: T, b: T) -> T {
	cast((a.as_f64() / b.as_f64()).ceil())
}

/// Rounds `x` up to the next multiple of `alignment`, which must be a power of two.
///
/// Wraps around when the aligned value does not fit in `T`.
pub fn align<T: Integer>(x: T, alignment: T) -> T {
	debug_assert!(alignment > T::ZERO, "alignment must be positive");
	x.wrapping_add(alignment).wrapping_sub(T::ONE) & !(alignment - T::ONE)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn zero_tolerance() {
		assert!(is_zero(0.0f32));
		assert!(is_zero(f32::EPSILON));
		assert!(is_zero(-f32::EPSILON));
		assert!(!is_zero(2.0 * f32::EPSILON));
		assert!(!is_zero(-1e-3f64));
		assert!(is_zero(0u32));
		assert!(!is_zero(1u32));
		assert!(!is_zero(-1i32));
	}

	#[test]
	fn clamp_range() {
		assert_eq!(clamp(5, 0, 3), 3);
		assert_eq!(clamp(-2.0, -1.0, 1.0), -1.0);
		assert_eq!(clamp(0.25f32, 0.0, 1.0), 0.25);
	}

	#[test]
	fn lerp_endpoints() {
		assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
		assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
		assert_eq!(lerp(2.0f32, 6.0, 0.25), 3.0);
	}

	#[test]
	fn angle_conversion() {
		assert_abs_diff_eq!(deg_to_rad(180.0f32), PI, epsilon = 1e-6);
		assert_abs_diff_eq!(rad_to_deg(PI / 2.0), 90.0, epsilon = 1e-4);
		assert_abs_diff_eq!(rad_to_deg(deg_to_rad(37.5f64)), 37.5, epsilon = 1e-12);
	}

	#[test]
	fn sinc_kernels() {
		assert_eq!(sinc(0.0f32), 1.0);
		assert_abs_diff_eq!(sinc(PI), 0.0, epsilon = 1e-6);
		assert_abs_diff_eq!(sinc(PI / 2.0), 2.0 / PI, epsilon = 1e-6);

		assert_eq!(lanczos2(0.0f32), 1.0);
		assert_eq!(lanczos2(2.0f32), 0.0, "Outside the kernel support");
		assert_eq!(lanczos2(-2.5f32), 0.0, "Outside the kernel support");
		assert_abs_diff_eq!(lanczos2(1.0f64), 0.0, epsilon = 1e-12);

		assert_eq!(lanczos3(0.0f64), 1.0);
		assert_eq!(lanczos3(3.0f64), 0.0, "Outside the kernel support");
		assert!(lanczos3(0.5f64) > 0.0);
		assert_abs_diff_eq!(lanczos3(0.5f64), lanczos3(-0.5f64));
	}

	#[test]
	fn integer_helpers() {
		assert_eq!(up_div(10u32, 4), 3);
		assert_eq!(up_div(8u32, 4), 2);
		assert_eq!(align(13u32, 8), 16);
		assert_eq!(align(16usize, 16), 16);
		assert_eq!(align(0u64, 256), 0);
		assert_eq!(align(u32::MAX - 2, 8), 0, "Alignment past the end wraps");
		assert_eq!(align(250u8, 16), 0);
		assert_eq!(align(i32::MAX - 3, 4), i32::MAX - 3);
	}
}
