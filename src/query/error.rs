use core::fmt;

/// Error indicating that an overlap test is not supported for a given shape.
///
/// Returned by [`OverlapDispatcher::intersection_test`](crate::query::OverlapDispatcher)
/// for shapes it does not know how to test. The overlap queries skip such candidates.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("overlap test not supported for this shape")
    }
}

impl std::error::Error for Unsupported {}

/// Errors reported by [`try_overlap_mesh_collider`](crate::query::try_overlap_mesh_collider).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlapError {
    /// The origin collider is not flagged as convex.
    #[error("the mesh collider is not flagged as convex.")]
    NonConvexMesh,
    /// The origin mesh has no vertex or no normal.
    #[error("the mesh collider has no vertex or no normal.")]
    EmptyMesh,
}
