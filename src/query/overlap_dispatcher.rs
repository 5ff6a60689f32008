//! Selection of the overlap test matching the kind of a candidate shape.
//!
//! An [`OverlapDispatcher`] receives the origin convex mesh and one candidate shape,
//! both placed in world-space, and tells whether they overlap. The
//! [`DefaultOverlapDispatcher`] knows every built-in [`TypedShape`] except
//! [`TypedShape::Custom`], for which it returns [`Unsupported`].
//!
//! Custom shapes are handled by implementing this trait and chaining the default
//! dispatcher behind it:
//!
//! ```
//! use overlap3d::math::Vector;
//! use overlap3d::query::{DefaultOverlapDispatcher, OverlapDispatcher, Unsupported};
//! use overlap3d::shape::{ConvexMesh, TypedShape};
//! use overlap3d::transform::RigidTransform;
//!
//! /// Every custom shape with id `0` fills the whole world.
//! struct EverywhereDispatcher;
//!
//! impl OverlapDispatcher for EverywhereDispatcher {
//!     fn intersection_test(
//!         &self,
//!         _pos1: &RigidTransform,
//!         _mesh1: &ConvexMesh,
//!         _pos2: &RigidTransform,
//!         shape2: TypedShape,
//!     ) -> Result<bool, Unsupported> {
//!         match shape2 {
//!             TypedShape::Custom(0) => Ok(true),
//!             _ => Err(Unsupported),
//!         }
//!     }
//! }
//!
//! let dispatcher = EverywhereDispatcher.chain(DefaultOverlapDispatcher::default());
//! let mesh = ConvexMesh::cube(Vector::repeat(1.0));
//! let pos = RigidTransform::identity();
//! assert_eq!(dispatcher.intersection_test(&pos, &mesh, &pos, TypedShape::Custom(0)), Ok(true));
//! assert_eq!(dispatcher.intersection_test(&pos, &mesh, &pos, TypedShape::Custom(1)), Err(Unsupported));
//! ```

use crate::query::details;
use crate::query::{BatchEvaluator, BatchOptions, Unsupported};
use crate::shape::{ConvexMesh, TypedShape};
use crate::transform::RigidTransform;

/// Dispatcher for overlap tests between a convex mesh and any shape.
pub trait OverlapDispatcher: Send + Sync {
    /// Tests whether `mesh1` placed at `pos1` and `shape2` placed at `pos2` overlap.
    ///
    /// Returns `Err(Unsupported)` if this dispatcher does not know how to test `shape2`.
    fn intersection_test(
        &self,
        pos1: &RigidTransform,
        mesh1: &ConvexMesh,
        pos2: &RigidTransform,
        shape2: TypedShape,
    ) -> Result<bool, Unsupported>;

    /// Construct an `OverlapDispatcher` that falls back on `other` for shapes not
    /// supported by `self`.
    fn chain<U: OverlapDispatcher>(self, other: U) -> OverlapDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        OverlapDispatcherChain(self, other)
    }
}

/// The composition of two dispatchers, see [`OverlapDispatcher::chain`].
pub struct OverlapDispatcherChain<T, U>(T, U);

impl<T: OverlapDispatcher, U: OverlapDispatcher> OverlapDispatcher
    for OverlapDispatcherChain<T, U>
{
    fn intersection_test(
        &self,
        pos1: &RigidTransform,
        mesh1: &ConvexMesh,
        pos2: &RigidTransform,
        shape2: TypedShape,
    ) -> Result<bool, Unsupported> {
        self.0
            .intersection_test(pos1, mesh1, pos2, shape2)
            .or_else(|Unsupported| self.1.intersection_test(pos1, mesh1, pos2, shape2))
    }
}

/// The dispatcher used by default by the overlap queries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultOverlapDispatcher {
    /// The evaluator running the per-axis and per-vertex batches.
    pub evaluator: BatchEvaluator,
}

impl DefaultOverlapDispatcher {
    /// A dispatcher whose batches use the given options.
    pub fn new(options: BatchOptions) -> Self {
        Self {
            evaluator: BatchEvaluator::new(options),
        }
    }
}

impl OverlapDispatcher for DefaultOverlapDispatcher {
    fn intersection_test(
        &self,
        pos1: &RigidTransform,
        mesh1: &ConvexMesh,
        pos2: &RigidTransform,
        shape2: TypedShape,
    ) -> Result<bool, Unsupported> {
        let evaluator = &self.evaluator;

        match shape2 {
            TypedShape::ConvexMesh(mesh2) => Ok(details::intersection_test_mesh_mesh(
                evaluator, pos1, mesh1, pos2, mesh2,
            )),
            TypedShape::Cuboid(cuboid2) => Ok(details::intersection_test_mesh_cuboid(
                evaluator, pos1, mesh1, pos2, cuboid2,
            )),
            TypedShape::Ball(ball2) => Ok(details::intersection_test_mesh_ball(
                evaluator, pos1, mesh1, pos2, ball2,
            )),
            TypedShape::Capsule(capsule2) => Ok(details::intersection_test_mesh_capsule(
                evaluator, pos1, mesh1, pos2, capsule2,
            )),
            TypedShape::Custom(_) => Err(Unsupported),
        }
    }
}
