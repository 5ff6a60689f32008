//! Overlap queries between a convex mesh and the colliders around it.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::overlap_mesh()`] to find the colliders overlapping a convex mesh, given its
//!   transform and a broad-phase.
//! * [`query::overlap_mesh_collider()`] to do the same for a [`MeshCollider`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule test a convex mesh against one
//! shape known at compile-time. They have the form `intersection_test_mesh_[shape]()`.
//!
//! [`query::overlap_mesh()`]: crate::query::overlap_mesh
//! [`query::overlap_mesh_collider()`]: crate::query::overlap_mesh_collider
//! [`MeshCollider`]: crate::shape::MeshCollider

pub use self::batch::{BatchEvaluator, BatchOptions, Reduction};
pub use self::error::{OverlapError, Unsupported};
pub use self::intersection_test::intersection_test;
pub use self::overlap_dispatcher::{
    DefaultOverlapDispatcher, OverlapDispatcher, OverlapDispatcherChain,
};
pub use self::overlap_mesh::{
    overlap_candidates, overlap_mesh, overlap_mesh_collider, overlap_mesh_with,
    try_overlap_mesh_collider,
};

mod batch;
mod error;
mod intersection_test;
mod overlap_dispatcher;
mod overlap_mesh;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
