use crate::query::{BatchEvaluator, Reduction};
use crate::shape::{Ball, ConvexMesh};
use crate::transform::RigidTransform;

/// Intersection test between a convex mesh and a ball.
///
/// Succeeds iff at least one vertex of the mesh lies inside of the ball, its boundary
/// included. A ball entirely inside of the mesh, or crossing one of its faces without
/// containing any vertex, is not detected.
///
/// The world radius of the ball is its radius times the largest absolute scale factor
/// of `pos2`. A mesh without vertices or without normals never overlaps the ball.
pub fn intersection_test_mesh_ball(
    evaluator: &BatchEvaluator,
    pos1: &RigidTransform,
    mesh1: &ConvexMesh,
    pos2: &RigidTransform,
    ball2: &Ball,
) -> bool {
    if mesh1.is_empty() {
        return false;
    }

    let ball = ball2.transform_by(pos2);
    let vertices = mesh1.vertices();

    evaluator.evaluate(vertices.len(), Reduction::Any, |i| {
        ball.contains_point(&pos1.transform_point(&vertices[i]))
    })
}
