use crate::shape::ConvexMesh;
use crate::transform::RigidTransform;
use std::sync::Arc;

/// A convex mesh placed in the world, usable as the origin of an overlap query.
///
/// The `convex` flag is the only convexity information the queries look at: a collider
/// not flagged as convex never reports any overlap.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshCollider {
    /// The geometry of the collider, in its local frame.
    pub mesh: Arc<ConvexMesh>,
    /// The world-space placement of the collider.
    pub transform: RigidTransform,
    /// Is `mesh` known to be a convex hull?
    pub convex: bool,
}

impl MeshCollider {
    /// Creates a collider flagged as convex.
    pub fn new(mesh: impl Into<Arc<ConvexMesh>>, transform: RigidTransform) -> Self {
        Self {
            mesh: mesh.into(),
            transform,
            convex: true,
        }
    }

    /// Sets the convexity flag of this collider.
    pub fn with_convex(mut self, convex: bool) -> Self {
        self.convex = convex;
        self
    }
}
