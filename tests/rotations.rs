use rand::{Rng, SeedableRng, rngs::StdRng};
use starmath::{DMat4, DQuat, DVec3, Mat4, Quat, Vec3};

const SAMPLES: usize = 200;

fn random_vec3(rng: &mut StdRng, extent: f32) -> Vec3 {
	Vec3::new(
		rng.gen_range(-extent..extent),
		rng.gen_range(-extent..extent),
		rng.gen_range(-extent..extent),
	)
}

fn random_axis(rng: &mut StdRng) -> Vec3 {
	loop {
		let v = random_vec3(rng, 1.0);
		if v.length() > 0.1 {
			return v.normalized();
		}
	}
}

fn random_rotation(rng: &mut StdRng) -> Quat {
	Quat::from_axis_angle(random_axis(rng), rng.gen_range(-starmath::PI..starmath::PI))
}

fn assert_vec_near(a: Vec3, b: Vec3, eps: f32) {
	assert!((a - b).length() < eps, "{} != {}", a, b);
}

fn assert_mat_near(a: &Mat4, b: &Mat4, eps: f32) {
	for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
		assert!((x - y).abs() < eps, "\n{}!=\n{}", a, b);
	}
}

#[test]
fn rotate_agrees_with_rotation_matrix() {
	let mut rng = StdRng::seed_from_u64(0x5eed);

	for _ in 0..SAMPLES {
		let axis = random_axis(&mut rng);
		let angle = rng.gen_range(-starmath::PI..starmath::PI);
		let q = Quat::from_axis_angle(axis, angle);
		let v = random_vec3(&mut rng, 10.0);

		assert_vec_near(q.rotate(v), q.to_rotation_matrix() * v, 1e-4);
		assert_vec_near(q.rotate(v), Mat4::from_rotation_axis(axis, angle) * v, 1e-4);
	}
}

#[test]
fn rotation_preserves_length() {
	let mut rng = StdRng::seed_from_u64(1);

	for _ in 0..SAMPLES {
		let q = random_rotation(&mut rng);
		let v = random_vec3(&mut rng, 10.0);
		assert!((q.rotate(v).length() - v.length()).abs() < 1e-4);
	}
}

#[test]
fn composition_matches_matrix_product() {
	let mut rng = StdRng::seed_from_u64(2);

	for _ in 0..SAMPLES {
		let (q1, q2) = (random_rotation(&mut rng), random_rotation(&mut rng));
		let v = random_vec3(&mut rng, 5.0);

		assert_vec_near((q1 * q2).rotate(v), q1.rotate(q2.rotate(v)), 1e-4);
		assert_mat_near(
			&(q1 * q2).to_rotation_matrix(),
			&(q1.to_rotation_matrix() * q2.to_rotation_matrix()),
			1e-5,
		);
	}
}

#[test]
fn unit_inverse_is_conjugate() {
	let mut rng = StdRng::seed_from_u64(3);

	for _ in 0..SAMPLES {
		let q = random_rotation(&mut rng);
		assert!((q * q.inverse_unit()).approx_eq(Quat::IDENTITY, 1e-5));
		assert!(q.inverse().approx_eq(q.inverse_unit(), 1e-5));
	}
}

#[test]
fn axis_angle_round_trip() {
	let mut rng = StdRng::seed_from_u64(4);

	for _ in 0..SAMPLES {
		let axis = random_axis(&mut rng);
		let angle = rng.gen_range(0.1..starmath::PI - 0.1);

		let (axis2, angle2) = Quat::from_axis_angle(axis, angle).to_axis_angle();
		assert_vec_near(axis2, axis, 1e-4);
		assert!((angle2 - angle).abs() < 1e-4, "{} != {}", angle2, angle);
	}
}

#[test]
fn rotation_matrix_round_trip() {
	let mut rng = StdRng::seed_from_u64(5);

	for _ in 0..SAMPLES {
		let q = random_rotation(&mut rng);
		let back = Quat::from_rotation_matrix(&q.to_rotation_matrix());
		// q and -q describe the same rotation.
		assert!(back.approx_eq(q, 1e-4) || back.approx_eq(-q, 1e-4), "{} != {}", back, q);
	}
}

#[test]
fn rotation_inverse_is_transpose() {
	let mut rng = StdRng::seed_from_u64(6);

	for _ in 0..SAMPLES {
		let m = random_rotation(&mut rng).to_rotation_matrix();
		assert_mat_near(&m.inverse(), &m.transpose(), 1e-5);
	}
}

#[test]
fn affine_inverse_round_trip() {
	let mut rng = StdRng::seed_from_u64(7);

	for _ in 0..SAMPLES {
		let scale = DVec3::new(
			rng.gen_range(0.5..2.0),
			rng.gen_range(0.5..2.0),
			rng.gen_range(0.5..2.0),
		);
		let translation = DVec3::new(
			rng.gen_range(-10.0..10.0),
			rng.gen_range(-10.0..10.0),
			rng.gen_range(-10.0..10.0),
		);
		let axis = DVec3::new(rng.gen_range(0.1..1.0), rng.gen_range(-1.0..1.0), 0.5).normalized();
		let rotation = DQuat::from_axis_angle(axis, rng.gen_range(-3.0..3.0));

		let m = DMat4::from_translation(translation) * rotation.to_rotation_matrix() * DMat4::from_scaling(scale);
		let product = m * m.inverse();

		for (x, y) in product.as_slice().iter().zip(DMat4::IDENTITY.as_slice()) {
			assert!((x - y).abs() < 1e-9, "\n{}", product);
		}

		let point = DVec3::new(1.0, -2.0, 3.0);
		assert!((m.inverse() * (m * point) - point).length() < 1e-9);
	}
}
