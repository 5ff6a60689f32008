use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::transform::RigidTransform;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball, in the local frame of its collider.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball centered at the local origin.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball {
            center: Point::origin(),
            radius,
        }
    }

    /// Creates a new ball with an offset center.
    #[inline]
    pub fn with_center(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// The world-space ball described by `self` placed with `transform`.
    ///
    /// The radius is multiplied by the largest absolute scale factor, so a non-uniformly
    /// scaled ball stays a ball (it is not turned into an ellipsoid).
    #[inline]
    pub fn transform_by(&self, transform: &RigidTransform) -> Ball {
        Ball {
            center: transform.transform_point(&self.center),
            radius: self.radius * transform.max_scale(),
        }
    }

    /// Does this ball contain `pt`? Points on the sphere are contained.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// The AABB of this ball in the frame its center is expressed in.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }
}
