use overlap3d::math::{Point, Rotation, Vector};
use overlap3d::query;
use overlap3d::shape::{Ball, ConvexMesh, TypedShape};
use overlap3d::transform::RigidTransform;

fn single_vertex_mesh(x: f32) -> ConvexMesh {
    ConvexMesh::new(vec![Point::new(x, 0.0, 0.0)], vec![Vector::x()])
}

#[test]
fn ball_boundary_is_inclusive() {
    let ball = Ball::new(1.0);
    let origin = RigidTransform::identity();

    for (x, expected) in [(0.999, true), (1.0, true), (1.001, false)] {
        let mesh = single_vertex_mesh(x);
        assert_eq!(
            query::intersection_test(&origin, &mesh, &origin, TypedShape::Ball(&ball)),
            Ok(expected),
            "vertex at x = {}",
            x
        );
    }
}

#[test]
fn ball_containment_is_rotation_invariant() {
    let ball = Ball::new(1.0);
    let origin = RigidTransform::identity();
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        let rot = Rotation::from_euler_angles(
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
            rng.rand_float() * 6.0,
        );
        let rotated = RigidTransform::from_position_rotation(Point::origin(), rot);

        let inside = single_vertex_mesh(0.99);
        let outside = single_vertex_mesh(1.01);
        assert_eq!(
            query::intersection_test(&rotated, &inside, &origin, TypedShape::Ball(&ball)),
            Ok(true)
        );
        assert_eq!(
            query::intersection_test(&rotated, &outside, &origin, TypedShape::Ball(&ball)),
            Ok(false)
        );
    }
}
