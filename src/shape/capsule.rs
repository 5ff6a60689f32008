use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::transform::RigidTransform;

/// The local axis a capsule is aligned with.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash)]
pub enum CapsuleAxis {
    /// The local `x` axis.
    X,
    /// The local `y` axis.
    #[default]
    Y,
    /// The local `z` axis.
    Z,
}

impl CapsuleAxis {
    /// The local unit vector of this axis.
    pub fn unit_vector(self) -> Vector<Real> {
        match self {
            CapsuleAxis::X => Vector::x(),
            CapsuleAxis::Y => Vector::y(),
            CapsuleAxis::Z => Vector::z(),
        }
    }
}

/// A capsule: a cylinder capped with two half-spheres.
///
/// `height` is the total length of the capsule including both caps, so the inner segment
/// has length `height - 2 * radius` (zero if the height is smaller than the diameter).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The center of the capsule, in the local frame of its collider.
    pub center: Point<Real>,
    /// The radius of the capsule.
    pub radius: Real,
    /// The total height of the capsule, caps included.
    pub height: Real,
    /// The local axis the capsule is aligned with.
    pub axis: CapsuleAxis,
}

impl Capsule {
    /// Creates a new capsule centered at the local origin.
    pub fn new(axis: CapsuleAxis, height: Real, radius: Real) -> Self {
        Self {
            center: Point::origin(),
            radius,
            height,
            axis,
        }
    }

    /// Creates a new capsule aligned with the `y` axis.
    pub fn new_y(height: Real, radius: Real) -> Self {
        Self::new(CapsuleAxis::Y, height, radius)
    }

    /// Moves the center of this capsule in its local frame.
    pub fn with_center(mut self, center: Point<Real>) -> Self {
        self.center = center;
        self
    }

    /// Resolves this capsule into a world-space segment and radius.
    ///
    /// The world radius uses the largest of the absolute `x` and `z` scale factors, and
    /// the world height uses the absolute `y` scale factor, whatever `self.axis` is.
    pub fn resolve(&self, transform: &RigidTransform) -> CapsuleSegment {
        let scale = transform.scale.abs();
        let radius = self.radius * scale.x.max(scale.z);
        let height = self.height * scale.y;
        let center = transform.transform_point(&self.center);
        let dir = transform.transform_direction(&self.axis.unit_vector());
        let half_segment = (height * 0.5 - radius).max(0.0);
        let offset = dir * half_segment;

        CapsuleSegment {
            start: center - offset,
            end: center + offset,
            radius,
        }
    }
}

/// A capsule resolved in world-space: every point within `radius` of the segment
/// `[start, end]`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct CapsuleSegment {
    /// The first endpoint of the inner segment.
    pub start: Point<Real>,
    /// The second endpoint of the inner segment.
    pub end: Point<Real>,
    /// The radius around the segment.
    pub radius: Real,
}

impl CapsuleSegment {
    /// Creates a new capsule segment.
    pub fn new(start: Point<Real>, end: Point<Real>, radius: Real) -> Self {
        Self { start, end, radius }
    }

    /// The squared length of the inner segment.
    #[inline]
    pub fn length_squared(&self) -> Real {
        (self.end - self.start).norm_squared()
    }

    /// Has the inner segment collapsed into a single point?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
    }

    /// The point of the inner segment closest to `pt`.
    ///
    /// A degenerate segment returns `start`.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let ab = self.end - self.start;
        let denom = ab.norm_squared();

        if denom <= DEFAULT_EPSILON * DEFAULT_EPSILON {
            return self.start;
        }

        let t = ((*pt - self.start).dot(&ab) / denom).clamp(0.0, 1.0);
        self.start + ab * t
    }

    /// Is `pt` inside of this capsule? Points on its boundary are inside.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.closest_point(pt), pt) <= self.radius * self.radius
    }

    /// The world-space AABB of this capsule.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.start.inf(&self.end), self.start.sup(&self.end)).loosened(self.radius)
    }
}
