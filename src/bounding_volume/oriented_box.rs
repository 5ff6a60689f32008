//! Oriented bounding box used as the broad-phase query volume.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, Vector};
use crate::transform::RigidTransform;

/// A box with an arbitrary orientation, given by its center, half-extents and rotation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct OrientedBox {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along its own axes.
    pub half_extents: Vector<Real>,
    /// The orientation of the box.
    pub rotation: Rotation<Real>,
}

impl OrientedBox {
    /// Creates a new oriented box.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Rotation<Real>) -> Self {
        Self {
            center,
            half_extents,
            rotation,
        }
    }

    /// The world-space bounds of a shape whose local bounds are `local_aabb`.
    ///
    /// The center is the local center mapped by `transform`; the half-extents are the local
    /// half-extents scaled by the absolute scale; the orientation is the transform's rotation.
    pub fn from_local_aabb(local_aabb: &Aabb, transform: &RigidTransform) -> Self {
        Self::new(
            transform.transform_point(&local_aabb.center()),
            local_aabb
                .half_extents()
                .component_mul(&transform.scale.abs()),
            transform.rotation,
        )
    }

    /// The world-space AABB enclosing this box.
    pub fn aabb(&self) -> Aabb {
        let ws_half_extents =
            self.rotation.to_rotation_matrix().into_inner().abs() * self.half_extents;
        Aabb::from_half_extents(self.center, ws_half_extents)
    }

    /// Is the world-space point `pt` inside of this box (boundary included)?
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.rotation.inverse_transform_vector(&(*pt - self.center));
        (local.abs() - self.half_extents).max() <= 0.0
    }
}
