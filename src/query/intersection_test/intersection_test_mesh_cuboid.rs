use crate::math::{Point, Real, Vector};
use crate::query::sat;
use crate::query::BatchEvaluator;
use crate::shape::{ConvexMesh, Cuboid};
use crate::transform::RigidTransform;

/// Intersection test between a convex mesh and a cuboid.
///
/// The cuboid is tested as a convex mesh made of its 8 corners and 6 face normals. Its
/// corners are scaled by `pos2` like any other vertex, its normals are only rotated.
pub fn intersection_test_mesh_cuboid(
    evaluator: &BatchEvaluator,
    pos1: &RigidTransform,
    mesh1: &ConvexMesh,
    pos2: &RigidTransform,
    cuboid2: &Cuboid,
) -> bool {
    if mesh1.is_empty() {
        return false;
    }

    let corners: [Point<Real>; 8] = cuboid2.local_vertices().map(|p| pos2.transform_point(&p));
    let axes: Vec<Vector<Real>> = mesh1
        .normals()
        .iter()
        .map(|n| pos1.transform_direction(n))
        .chain(
            cuboid2
                .local_face_normals()
                .iter()
                .map(|n| pos2.transform_direction(n)),
        )
        .collect();
    let pts1 = evaluator.transform_points(mesh1.vertices(), pos1);

    sat::sat_intersection_test(evaluator, &axes, &pts1, &corners)
}
