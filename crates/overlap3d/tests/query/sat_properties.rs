use overlap3d::math::{Point, Rotation, Vector};
use overlap3d::query::details::intersection_test_mesh_mesh;
use overlap3d::query::sat::axes_overlap;
use overlap3d::query::BatchEvaluator;
use overlap3d::shape::{ConvexMesh, Cuboid};
use overlap3d::transform::RigidTransform;
use std::f32::consts::TAU;

fn random_rotation(rng: &mut oorandom::Rand32) -> Rotation<f32> {
    Rotation::from_euler_angles(
        rng.rand_float() * TAU,
        rng.rand_float() * TAU,
        rng.rand_float() * TAU,
    )
}

// Multiples of 1/4 keep every sum below exact in f32.
fn grid_point(rng: &mut oorandom::Rand32) -> Point<f32> {
    Point::new(
        rng.rand_range(0..17) as f32 * 0.25 - 2.0,
        rng.rand_range(0..17) as f32 * 0.25 - 2.0,
        rng.rand_range(0..17) as f32 * 0.25 - 2.0,
    )
}

fn random_transform(rng: &mut oorandom::Rand32, spread: f32) -> RigidTransform {
    let position = grid_point(rng) * spread;
    RigidTransform::from_position_rotation(position, random_rotation(rng))
}

#[test]
fn axis_test_is_symmetric_and_ignores_axis_sign() {
    let mut rng = oorandom::Rand32::new(42);
    let cube1 = Cuboid::new(Vector::new(0.5, 1.0, 0.25)).local_vertices();
    let cube2 = Cuboid::new(Vector::new(1.0, 0.3, 0.7)).local_vertices();

    for _ in 0..500 {
        let t1 = random_transform(&mut rng, 1.0);
        let t2 = random_transform(&mut rng, 1.0);
        let axis = Vector::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        );

        let overlap = axes_overlap(&axis, &cube1, &t1, &cube2, &t2);
        assert_eq!(axes_overlap(&axis, &cube2, &t2, &cube1, &t1), overlap);
        assert_eq!(axes_overlap(&-axis, &cube1, &t1, &cube2, &t2), overlap);
    }
}

#[test]
fn mesh_mesh_is_symmetric() {
    let mut rng = oorandom::Rand32::new(3);
    let evaluator = BatchEvaluator::default();
    let mesh1 = ConvexMesh::cube(Vector::new(0.5, 1.0, 0.25));
    let mesh2 = ConvexMesh::cube(Vector::new(1.0, 0.3, 0.7));
    let mut hits = 0;

    for _ in 0..500 {
        let t1 = random_transform(&mut rng, 0.5);
        let t2 = random_transform(&mut rng, 0.5);

        let overlap = intersection_test_mesh_mesh(&evaluator, &t1, &mesh1, &t2, &mesh2);
        let reversed = intersection_test_mesh_mesh(&evaluator, &t2, &mesh2, &t1, &mesh1);
        assert_eq!(reversed, overlap);
        hits += overlap as usize;
    }

    // Both outcomes must actually be exercised.
    assert!(hits > 0 && hits < 500);
}

#[test]
fn translating_both_shapes_preserves_the_result() {
    let mut rng = oorandom::Rand32::new(11);
    let evaluator = BatchEvaluator::sequential();
    let mesh1 = ConvexMesh::cube(Vector::new(0.5, 1.0, 0.25));
    let mesh2 = ConvexMesh::cube(Vector::new(1.0, 0.75, 0.5));

    for _ in 0..500 {
        let p1 = grid_point(&mut rng);
        let p2 = grid_point(&mut rng);
        let shift = grid_point(&mut rng).coords;

        let t1 = RigidTransform::from_position(p1);
        let t2 = RigidTransform::from_position(p2);
        let overlap = intersection_test_mesh_mesh(&evaluator, &t1, &mesh1, &t2, &mesh2);

        let t1 = t1.translated(&shift);
        let t2 = t2.translated(&shift);
        assert_eq!(
            intersection_test_mesh_mesh(&evaluator, &t1, &mesh1, &t2, &mesh2),
            overlap,
            "{:?} {:?} shifted by {:?}",
            p1,
            p2,
            shift
        );
    }
}
