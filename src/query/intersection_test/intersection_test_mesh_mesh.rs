use crate::math::{Real, Vector};
use crate::query::sat;
use crate::query::BatchEvaluator;
use crate::shape::ConvexMesh;
use crate::transform::RigidTransform;

/// Intersection test between two convex meshes.
///
/// The candidate separating axes are the face normals of `mesh1` rotated by `pos1`,
/// followed by the face normals of `mesh2` rotated by `pos2`. Normals are not
/// re-normalized after a non-uniform scale.
pub fn intersection_test_mesh_mesh(
    evaluator: &BatchEvaluator,
    pos1: &RigidTransform,
    mesh1: &ConvexMesh,
    pos2: &RigidTransform,
    mesh2: &ConvexMesh,
) -> bool {
    if mesh1.is_empty() || mesh2.is_empty() {
        return false;
    }

    let axes: Vec<Vector<Real>> = mesh1
        .normals()
        .iter()
        .map(|n| pos1.transform_direction(n))
        .chain(mesh2.normals().iter().map(|n| pos2.transform_direction(n)))
        .collect();
    let pts1 = evaluator.transform_points(mesh1.vertices(), pos1);
    let pts2 = evaluator.transform_points(mesh2.vertices(), pos2);

    sat::sat_intersection_test(evaluator, &axes, &pts1, &pts2)
}
