//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use crate::transform::RigidTransform;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. A box with `mins > maxs` on some axis is
/// *invalid*: it encloses nothing and intersects nothing.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and `maxs` components
    /// set to `-Real::MAX`.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing all the given points.
    ///
    /// Returns an invalid AABB if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut aabb = Self::new_invalid();

        for pt in pts {
            aabb.mins = aabb.mins.inf(pt);
            aabb.maxs = aabb.maxs.sup(pt);
        }

        aabb
    }

    /// Does this AABB enclose at least one point?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// Checks if this AABB intersects `other`. Touching boxes intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.is_valid()
            && other.is_valid()
            && na::partial_le(&self.mins, &other.maxs)
            && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Enlarges this AABB by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        Aabb {
            mins: self.mins - Vector::repeat(amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Computes the world-space AABB enclosing this local AABB once transformed by `m`.
    ///
    /// The local half-extents are scaled, then rotated with the absolute rotation matrix,
    /// so the result stays conservative for any rotation.
    pub fn transform_by(&self, m: &RigidTransform) -> Self {
        if !self.is_valid() {
            return *self;
        }

        let center = m.transform_point(&self.center());
        let half_extents = self.half_extents().component_mul(&m.scale.abs());
        let ws_half_extents = m.rotation.to_rotation_matrix().into_inner().abs() * half_extents;
        Aabb::from_half_extents(center, ws_half_extents)
    }
}
