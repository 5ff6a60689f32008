/*!
overlap3d
=========

**overlap3d** answers one question for a convex mesh placed in the world: which of the
colliders around it does it actually overlap?

A coarse broad-phase (anything implementing [`partitioning::BroadPhase`]) shortlists
candidates with an oriented box query, then every candidate is tested exactly against
the mesh:

* convex meshes and boxes with the Separating Axis Theorem over face normals,
* spheres with a vertex-to-center distance test,
* capsules with two cap-sphere tests followed by a vertex-to-segment distance test.

Every exact test is a flat data-parallel sweep over axes or vertices (see
[`query::BatchEvaluator`]), evaluated with `rayon` when the `parallel` feature is
enabled.

```
use overlap3d::math::{Point, Vector};
use overlap3d::partitioning::{ColliderSet, LayerMask, QueryTriggerInteraction};
use overlap3d::query::overlap_mesh;
use overlap3d::shape::{Ball, ColliderShape, ConvexMesh};
use overlap3d::transform::RigidTransform;

let mut colliders = ColliderSet::new();
let ball = colliders.insert(
    ColliderShape::Ball(Ball::new(0.5)),
    RigidTransform::from_position(Point::new(1.2, 1.2, 1.2)),
);

let cube = ConvexMesh::cube(Vector::repeat(1.0));
let mut candidates = [ball; 8];
let mut results = [ball; 8];
let count = overlap_mesh(
    &cube,
    &RigidTransform::identity(),
    &colliders,
    &mut candidates,
    &mut results,
    LayerMask::all(),
    QueryTriggerInteraction::UseGlobal,
);
assert_eq!(count, 1);
assert_eq!(results[0], ball);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod transform;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry3, Point3, UnitQuaternion, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The rigid motion type (rotation followed by translation, no scale).
    pub use Isometry3 as Isometry;
}
