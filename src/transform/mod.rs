//! Rigid placement of shapes in world-space.

pub use self::rigid_transform::RigidTransform;

mod rigid_transform;
