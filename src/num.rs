use core::ops::{Add, Sub, Mul, Div, Rem, Neg, Not, BitAnd};
use core::ops::{AddAssign, SubAssign, MulAssign, DivAssign, RemAssign};
use core::cmp::{PartialEq, PartialOrd};
use core::fmt::Debug;

/// Forward a method to an inherent method of the primitive type.
macro_rules! forward {
	($( Self :: $method:ident ( self $( , $arg:ident : $ty:ty )* ) -> $ret:ty ; )*) => {$(
		#[inline]
		fn $method(self $( , $arg : $ty )* ) -> $ret {
			Self::$method(self $( , $arg )* )
		}
	)*};
}

/// Lossy conversion through `f64`, used for literals in generic code.
pub trait Cast where Self: Sized {
	fn from_f64(v: f64) -> Self;
	fn as_f64(&self) -> f64;
}

/// Converts between two scalar types, going through `f64`.
pub fn cast<T: Number, U: Number>(v: T) -> U {
	U::from_f64(v.as_f64())
}

pub trait NumOps<Rhs = Self, Output = Self>:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output> +
	Rem<Rhs, Output = Output>
{}

impl<T, Rhs, Output> NumOps<Rhs, Output> for T where T:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output> +
	Rem<Rhs, Output = Output>
{}

pub trait NumAssignOps<Rhs = Self>:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs> +
	RemAssign<Rhs>
{}

impl<T, Rhs> NumAssignOps<Rhs> for T where T:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs> +
	RemAssign<Rhs>
{}

pub trait Base: Copy + NumOps + NumAssignOps where Self: Sized {
	const ZERO: Self;
	const ONE: Self;
	const TWO: Self;

	const MIN: Self;
	const MAX: Self;

	/// Tolerance used by [`crate::is_zero`].
	/// Machine epsilon for floats, zero for integers.
	const EPSILON: Self;
}

/// Any primitive scalar a vector, matrix or box may be built from.
pub trait Number: Base + Cast + Default + Debug + PartialEq + PartialOrd + 'static {
	/// Compares the memory representation, so `-0.0` differs from `0.0` and
	/// a NaN equals an identical NaN.
	fn bitwise_eq(self, rhs: Self) -> bool;
}

pub trait NumberOps {
	fn min(a: Self, b: Self) -> Self;
	fn max(a: Self, b: Self) -> Self;
}

macro_rules! number_impl {
	($t:ident, $epsilon:expr) => {
		impl Base for $t {
			const ZERO: Self = 0 as Self;
			const ONE: Self = 1 as Self;
			const TWO: Self = 2 as Self;

			const MIN: Self = $t::MIN;
			const MAX: Self = $t::MAX;

			const EPSILON: Self = $epsilon;
		}

		impl Number for $t {
			fn bitwise_eq(self, rhs: Self) -> bool {
				self.to_ne_bytes() == rhs.to_ne_bytes()
			}
		}

		impl NumberOps for $t {
			fn min(a: Self, b: Self) -> Self {
				if b < a { b } else { a }
			}

			fn max(a: Self, b: Self) -> Self {
				if b > a { b } else { a }
			}
		}

		impl Cast for $t {
			fn from_f64(v: f64) -> Self {
				v as Self
			}

			fn as_f64(&self) -> f64 {
				*self as f64
			}
		}
	}
}

number_impl!(u8, 0);
number_impl!(i8, 0);
number_impl!(u16, 0);
number_impl!(i16, 0);
number_impl!(u32, 0);
number_impl!(i32, 0);
number_impl!(u64, 0);
number_impl!(i64, 0);
number_impl!(usize, 0);
number_impl!(isize, 0);
number_impl!(f32, f32::EPSILON);
number_impl!(f64, f64::EPSILON);

pub trait SignedNumber: Number + Neg<Output=Self> {
	const MINUS_ONE: Self;
}

pub trait SignedNumberOps: Neg<Output=Self> where Self: Sized {
	fn signum(self) -> Self;
	fn abs(self) -> Self;
}

macro_rules! signed_number_impl {
	($t:ident, $minus_one:literal) => {
		impl SignedNumber for $t {
			const MINUS_ONE: Self = $minus_one;
		}

		impl SignedNumberOps for $t {
			forward! {
				Self::signum(self) -> Self;
				Self::abs(self) -> Self;
			}
		}
	}
}

signed_number_impl!(i8, -1);
signed_number_impl!(i16, -1);
signed_number_impl!(i32, -1);
signed_number_impl!(i64, -1);
signed_number_impl!(isize, -1);
signed_number_impl!(f32, -1.0);
signed_number_impl!(f64, -1.0);

/// Unsigned and signed integers, for the bit-twiddling helpers.
pub trait Integer: Number + Ord + BitAnd<Output=Self> + Not<Output=Self> {
	fn wrapping_add(self, rhs: Self) -> Self;
	fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! integer_impl {
	($($t:ident),*) => {$(
		impl Integer for $t {
			forward! {
				Self::wrapping_add(self, rhs: Self) -> Self;
				Self::wrapping_sub(self, rhs: Self) -> Self;
			}
		}
	)*}
}

integer_impl!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

pub trait Float: SignedNumber {
	const PI: Self;
}

pub trait FloatOps: SignedNumberOps {
	/// Whether `self` and `b` differ by less than `eps`.
	fn approx(self, b: Self, eps: Self) -> bool;
	fn acos(self) -> Self;
	fn cos(self) -> Self;
	fn is_finite(self) -> bool;
	fn is_nan(self) -> bool;
	fn sin(self) -> Self;
	fn sin_cos(self) -> (Self, Self);
	fn sqrt(self) -> Self;
}

macro_rules! float_impl {
	($t:ident) => {
		impl Float for $t {
			const PI: Self = core::$t::consts::PI;
		}

		impl FloatOps for $t {
			fn approx(self, b: Self, eps: Self) -> bool {
				Self::abs(self - b) < eps
			}

			forward! {
				Self::acos(self) -> Self;
				Self::cos(self) -> Self;
				Self::is_finite(self) -> bool;
				Self::is_nan(self) -> bool;
				Self::sin(self) -> Self;
				Self::sin_cos(self) -> (Self, Self);
				Self::sqrt(self) -> Self;
			}
		}
	}
}

float_impl!(f32);
float_impl!(f64);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn epsilon_per_type() {
		assert_eq!(<f32 as Base>::EPSILON, f32::EPSILON);
		assert_eq!(<f64 as Base>::EPSILON, f64::EPSILON);
		assert_eq!(<i32 as Base>::EPSILON, 0);
		assert_eq!(<u8 as Base>::EPSILON, 0);
	}

	#[test]
	fn cast_between_types() {
		assert_eq!(cast::<i32, f32>(3), 3.0);
		assert_eq!(cast::<f64, u8>(2.9), 2, "Cast truncates towards zero");
	}

	#[test]
	fn bitwise_equality() {
		assert!(!0.0f32.bitwise_eq(-0.0), "Signed zeros differ");
		assert!(f64::NAN.bitwise_eq(f64::NAN));
		assert!(1.5f32.bitwise_eq(1.5));
		assert!(7u16.bitwise_eq(7));
		assert!(!(-1i8).bitwise_eq(1));
	}

	#[test]
	fn min_max() {
		assert_eq!(<u32 as NumberOps>::min(3, 7), 3);
		assert_eq!(<f32 as NumberOps>::max(-1.0, 2.5), 2.5);
	}
}
