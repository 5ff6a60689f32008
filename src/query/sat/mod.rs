//! Application of the Separating Axis Theorem (SAT) for overlap detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For convex polyhedra it is enough to test a finite
//! set of candidate axes; this crate uses the face normals of both shapes.
//!
//! The test of one axis is [`axes_overlap`]: it projects both vertex sets onto the axis
//! and checks whether the two resulting intervals intersect. An overlap is only proven
//! once **every** candidate axis fails to separate the shapes, see
//! [`sat_intersection_test`].
//!
//! Edge-edge axes (cross products of edges of both shapes) are not tested, so two
//! polyhedra separated only along such an axis are reported as overlapping.

pub use self::sat_axis_projection::{axes_overlap, world_axes_overlap, ProjectionInterval};

mod sat_axis_projection;

use crate::math::{Point, Real, Vector};
use crate::query::{BatchEvaluator, Reduction};

/// Tests two world-space vertex sets for overlap along every axis of `axes`.
///
/// Evaluates one batch element per axis, each one telling whether that axis fails to
/// separate the vertex sets, and succeeds iff no axis separates them. Returns `false` if
/// `axes`, `points1` or `points2` is empty.
pub fn sat_intersection_test(
    evaluator: &BatchEvaluator,
    axes: &[Vector<Real>],
    points1: &[Point<Real>],
    points2: &[Point<Real>],
) -> bool {
    if points1.is_empty() || points2.is_empty() {
        return false;
    }

    evaluator.evaluate(axes.len(), Reduction::All, |i| {
        world_axes_overlap(&axes[i], points1, points2)
    })
}
