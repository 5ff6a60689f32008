use overlap3d::math::{Point, Vector};
use overlap3d::query;
use overlap3d::shape::{Ball, Capsule, CapsuleAxis, ConvexMesh, TypedShape};
use overlap3d::transform::RigidTransform;

#[test]
fn degenerate_capsule_matches_ball() {
    let mut rng = oorandom::Rand32::new(1234);
    let origin = RigidTransform::identity();

    for axis in [CapsuleAxis::X, CapsuleAxis::Y, CapsuleAxis::Z] {
        // A height of exactly twice the radius leaves no segment between the caps.
        let capsule = Capsule::new(axis, 1.0, 0.5);
        let ball = Ball::new(0.5);

        for _ in 0..200 {
            let pt = Point::new(
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
            );
            let mesh = ConvexMesh::new(vec![pt], vec![Vector::x()]);
            let pos2 = RigidTransform::from_position(Point::new(0.1, 0.0, 0.0));

            let as_capsule = TypedShape::Capsule(&capsule);
            let as_ball = TypedShape::Ball(&ball);
            assert_eq!(
                query::intersection_test(&origin, &mesh, &pos2, as_capsule),
                query::intersection_test(&origin, &mesh, &pos2, as_ball),
                "vertex {:?}",
                pt
            );
        }
    }
}

#[test]
fn capsule_shorter_than_its_diameter_is_finite() {
    let capsule = Capsule::new_y(0.2, 1.0);
    let origin = RigidTransform::identity();
    let mesh = ConvexMesh::new(vec![Point::new(0.0, 0.9, 0.0)], vec![Vector::y()]);

    let segment = capsule.resolve(&origin);
    assert!(segment.start.coords.iter().all(|e| e.is_finite()));
    assert_eq!(
        query::intersection_test(&origin, &mesh, &origin, TypedShape::Capsule(&capsule)),
        Ok(true)
    );
}
