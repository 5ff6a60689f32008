use crate::query::{BatchEvaluator, Reduction};
use crate::shape::{Ball, Capsule, ConvexMesh};
use crate::transform::RigidTransform;

/// Intersection test between a convex mesh and a capsule.
///
/// Succeeds iff at least one vertex of the mesh lies inside of the capsule resolved by
/// [`Capsule::resolve`]. The vertices are tested against the sphere around the first
/// endpoint, then against the sphere around the second endpoint, then against the
/// whole segment; each of these batches stops the test as soon as it succeeds.
///
/// A mesh without vertices or without normals never overlaps the capsule.
pub fn intersection_test_mesh_capsule(
    evaluator: &BatchEvaluator,
    pos1: &RigidTransform,
    mesh1: &ConvexMesh,
    pos2: &RigidTransform,
    capsule2: &Capsule,
) -> bool {
    if mesh1.is_empty() {
        return false;
    }

    let segment = capsule2.resolve(pos2);
    let pts = evaluator.transform_points(mesh1.vertices(), pos1);
    let any_inside = |ball: Ball| {
        evaluator.evaluate(pts.len(), Reduction::Any, |i| ball.contains_point(&pts[i]))
    };

    if any_inside(Ball::with_center(segment.start, segment.radius)) {
        return true;
    }

    // Both endpoints coincide: the capsule is the sphere we just tested.
    if segment.is_degenerate() {
        return false;
    }

    if any_inside(Ball::with_center(segment.end, segment.radius)) {
        return true;
    }

    let on_segment = |i: usize| segment.contains_point(&pts[i]);
    evaluator.evaluate(pts.len(), Reduction::Any, on_segment)
}
