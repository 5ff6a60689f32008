//! Box shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The eight corners of this box, in its local frame.
    ///
    /// The i-th bit of the corner index is set iff. the corresponding component is
    /// positive, with `z` as bit 0 and `x` as bit 2.
    #[inline]
    pub fn local_vertices(&self) -> [Point<Real>; 8] {
        let he = self.half_extents;
        core::array::from_fn(|i| {
            let sx = if i & 0b100 != 0 { 1.0 } else { -1.0 };
            let sy = if i & 0b010 != 0 { 1.0 } else { -1.0 };
            let sz = if i & 0b001 != 0 { 1.0 } else { -1.0 };
            Point::new(sx * he.x, sy * he.y, sz * he.z)
        })
    }

    /// The outward normals of the six faces of this box, in its local frame.
    ///
    /// Opposite faces yield the same separating direction; both are kept so a box is
    /// tested exactly like a convex mesh with one normal per face.
    #[inline]
    pub fn local_face_normals(&self) -> [Vector<Real>; 6] {
        [
            -Vector::x(),
            Vector::x(),
            -Vector::y(),
            Vector::y(),
            -Vector::z(),
            Vector::z(),
        ]
    }

    /// The AABB of this box in its local frame.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let he = self.half_extents.abs();
        Aabb::new(Point::from(-he), Point::from(he))
    }
}
