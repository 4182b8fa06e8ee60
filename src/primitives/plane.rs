use crate::matrix::Vector3;
use crate::num::{Float, FloatOps, Number};

/// A plane `normal . p = distance`.
///
/// `distance` is only a metric distance when `normal` has unit length.
#[derive(Clone, Copy, Debug)]
pub struct Plane<T> {
	normal: Vector3<T>,
	distance: T,
}

impl<T: Number> Plane<T> {
	/// The normal is taken as is, callers normalize it themselves.
	pub fn new(normal: Vector3<T>, distance: T) -> Self {
		Self { normal, distance }
	}

	/// The plane with the given normal going through `point`.
	pub fn from_normal_point(normal: Vector3<T>, point: Vector3<T>) -> Self {
		Self::new(normal, normal.dot(point))
	}

	pub fn normal(&self) -> Vector3<T> {
		self.normal
	}

	pub fn distance(&self) -> T {
		self.distance
	}

	/// Positive on the side the normal points to.
	pub fn signed_distance(&self, point: Vector3<T>) -> T {
		self.normal.dot(point) - self.distance
	}
}

impl<T: Number> PartialEq for Plane<T> {
	fn eq(&self, rhs: &Self) -> bool {
		self.normal == rhs.normal && self.distance == rhs.distance
	}
}

impl<T: Float + FloatOps> Plane<T> {
	/// The plane through three points, facing the side from which they appear
	/// counter-clockwise. The points must not be collinear.
	pub fn from_points(p1: Vector3<T>, p2: Vector3<T>, p3: Vector3<T>) -> Self {
		let normal = (p2 - p1).cross(p3 - p1).normalized();
		Self::from_normal_point(normal, p1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Vec3;
	use approx::assert_abs_diff_eq;

	#[test]
	fn from_points() {
		let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Y);
		assert_eq!(plane.normal(), Vec3::Z);
		assert_abs_diff_eq!(plane.distance(), 0.0);

		let raised = Plane::from_points(
			Vec3::new(0.0, 0.0, 3.0),
			Vec3::new(0.0, 2.0, 3.0),
			Vec3::new(5.0, 0.0, 3.0),
		);
		assert_eq!(raised.normal(), -Vec3::Z, "Winding decides the facing");
		assert_abs_diff_eq!(raised.distance(), -3.0);
	}

	#[test]
	fn from_normal_point() {
		let plane = Plane::from_normal_point(Vec3::Y, Vec3::new(4.0, 2.0, -1.0));
		assert_eq!(plane.distance(), 2.0);
		assert_eq!(plane.signed_distance(Vec3::new(5.0, 3.0, 1.0)), 1.0);
		assert_eq!(plane.signed_distance(Vec3::new(0.0, -1.0, 0.0)), -3.0);
	}

	#[test]
	fn explicit_normal_is_kept() {
		let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
		assert_eq!(plane.normal(), Vec3::new(0.0, 2.0, 0.0));
		assert_eq!(plane.distance(), 1.0);

		let ints = Plane::new(crate::Vector3::new(0, 0, 1), 4);
		assert_eq!(ints.signed_distance(crate::Vector3::new(7, 7, 10)), 6);
	}
}
