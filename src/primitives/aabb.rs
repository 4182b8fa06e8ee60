use crate::matrix::Vector3;
use crate::num::{Number, NumberOps};

/// Axis-aligned box covering the half-open range `[min, max)` on every axis.
///
/// The default box is inverted, `min` at the largest and `max` at the smallest
/// representable value, so it contains nothing and the first
/// [`Aabb::extends`] collapses it onto the added point.
#[derive(Clone, Copy, Debug)]
pub struct Aabb<T> {
	min: Vector3<T>,
	max: Vector3<T>,
}

/// Triangles of [`Aabb::geometry`], two per face, counter-clockwise seen from outside.
const TRIANGLES: [u32; 36] = [
	0, 4, 6, 0, 6, 2, // -x
	1, 3, 7, 1, 7, 5, // +x
	0, 1, 5, 0, 5, 4, // -y
	2, 6, 7, 2, 7, 3, // +y
	0, 2, 3, 0, 3, 1, // -z
	4, 5, 7, 4, 7, 6, // +z
];

impl<T: Number> Aabb<T> {
	pub const EMPTY: Self = Self {
		min: Vector3::splat(T::MAX),
		max: Vector3::splat(T::MIN),
	};

	pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
		Self { min, max }
	}

	pub fn set_min_max(&mut self, min: Vector3<T>, max: Vector3<T>) {
		self.min = min;
		self.max = max;
	}

	pub fn min(&self) -> Vector3<T> {
		self.min
	}

	pub fn max(&self) -> Vector3<T> {
		self.max
	}

	/// `max - min`. Meaningless for an empty box.
	pub fn size(&self) -> Vector3<T> {
		self.max - self.min
	}

	/// Whether `min` exceeds `max` on some axis, as it does for the default box.
	pub fn is_empty(&self) -> bool {
		(0..3).any(|i| self.min[i] > self.max[i])
	}

	pub fn contains(&self, point: Vector3<T>) -> bool {
		(0..3).all(|i| self.min[i] <= point[i] && point[i] < self.max[i])
	}

	/// Returns the 8 corners and a 12 triangle index list for drawing the box.
	///
	/// Corner `i` takes `max` on the x axis when bit 0 of `i` is set, on y for
	/// bit 1 and on z for bit 2.
	pub fn geometry(&self) -> ([Vector3<T>; 8], [u32; 36]) {
		let corners = std::array::from_fn(|i| {
			let pick = |bit: usize, axis: usize| {
				if i & bit != 0 { self.max[axis] } else { self.min[axis] }
			};
			Vector3::new(pick(1, 0), pick(2, 1), pick(4, 2))
		});

		(corners, TRIANGLES)
	}
}

impl<T: Number + NumberOps> Aabb<T> {
	/// Grows the box to include `point`.
	pub fn extends(&mut self, point: Vector3<T>) {
		for i in 0..3 {
			self.min[i] = T::min(self.min[i], point[i]);
			self.max[i] = T::max(self.max[i], point[i]);
		}
	}
}

impl<T: Number> Default for Aabb<T> {
	fn default() -> Self {
		Self::EMPTY
	}
}

impl<T: Number> PartialEq for Aabb<T> {
	fn eq(&self, rhs: &Self) -> bool {
		self.min == rhs.min && self.max == rhs.max
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Vec3, Vector3};

	#[test]
	fn half_open_contains() {
		let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
		assert!(aabb.contains(Vec3::ZERO));
		assert!(!aabb.contains(Vec3::ONE), "Upper bound is excluded");
		assert!(aabb.contains(Vec3::splat(0.5)));
		assert!(!aabb.contains(Vec3::new(0.5, 1.0, 0.5)));
		assert!(!aabb.contains(Vec3::new(-0.1, 0.5, 0.5)));
		assert_eq!(aabb.size(), Vec3::ONE);
	}

	#[test]
	fn default_is_empty() {
		let aabb = Aabb::<f32>::default();
		assert!(aabb.is_empty());
		assert!(!aabb.contains(Vec3::ZERO));

		let ints = Aabb::<u32>::default();
		assert!(ints.is_empty());
		assert!(!Aabb::new(Vec3::ZERO, Vec3::ZERO).is_empty());
	}

	#[test]
	fn extends_collapses_then_grows() {
		let p = Vec3::new(1.0, -2.0, 3.0);
		let mut aabb = Aabb::default();
		aabb.extends(p);
		assert_eq!(aabb.min(), p);
		assert_eq!(aabb.max(), p);
		assert!(!aabb.is_empty());

		aabb.extends(Vec3::new(-1.0, 4.0, 3.0));
		assert_eq!(aabb, Aabb::new(Vec3::new(-1.0, -2.0, 3.0), Vec3::new(1.0, 4.0, 3.0)));
		assert_eq!(aabb.size(), Vec3::new(2.0, 6.0, 0.0));

		let mut ints = Aabb::<i32>::default();
		ints.extends(Vector3::new(5, -5, 0));
		assert_eq!(ints.min(), Vector3::new(5, -5, 0));
		assert_eq!(ints.max(), Vector3::new(5, -5, 0));

		aabb.set_min_max(Vec3::ZERO, Vec3::ONE);
		assert_eq!(aabb.max(), Vec3::ONE);
	}

	#[test]
	fn geometry_faces_outward() {
		let aabb = Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 3.0, 5.0));
		let (corners, indices) = aabb.geometry();

		assert_eq!(corners[0], aabb.min());
		assert_eq!(corners[7], aabb.max());
		assert_eq!(corners[3], Vec3::new(1.0, 3.0, 2.0));

		let center = (aabb.min() + aabb.max()) * 0.5;
		for triangle in indices.chunks_exact(3) {
			let [a, b, c] = [0, 1, 2].map(|i| corners[triangle[i] as usize]);
			let normal = (b - a).cross(c - a);
			let outward = (a + b + c) / 3.0 - center;
			assert!(normal.dot(outward) > 0.0, "Triangle {:?} faces inward", triangle);
		}

		for corner in 0..8 {
			assert!(indices.contains(&corner), "Corner {} is unused", corner);
		}
	}
}
