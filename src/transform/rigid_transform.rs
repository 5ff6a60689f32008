use crate::math::{Isometry, Point, Real, Rotation, Vector};
use approx::{AbsDiffEq, RelativeEq};

/// The world-space placement of a shape: a position, a rotation, and a (lossy) scale.
///
/// Points are mapped from the shape's local frame to world-space by applying the scale
/// component-wise, then the rotation, then the translation. Directions are only rotated.
///
/// A transform is a snapshot: queries copy it once and never mutate it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct RigidTransform {
    /// The world-space position of the shape's local origin.
    pub position: Point<Real>,
    /// The world-space orientation of the shape.
    pub rotation: Rotation<Real>,
    /// The per-axis scale applied in the shape's local frame, before rotation.
    pub scale: Vector<Real>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Creates a transform from all its parts.
    #[inline]
    pub fn new(position: Point<Real>, rotation: Rotation<Real>, scale: Vector<Real>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// The transform leaving every point unchanged.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Point::origin(), Rotation::identity(), Vector::repeat(1.0))
    }

    /// A pure translation with unit scale.
    #[inline]
    pub fn from_position(position: Point<Real>) -> Self {
        Self::new(position, Rotation::identity(), Vector::repeat(1.0))
    }

    /// A translation and rotation with unit scale.
    #[inline]
    pub fn from_position_rotation(position: Point<Real>, rotation: Rotation<Real>) -> Self {
        Self::new(position, rotation, Vector::repeat(1.0))
    }

    /// A translation and scale without rotation.
    #[inline]
    pub fn from_position_scale(position: Point<Real>, scale: Vector<Real>) -> Self {
        Self::new(position, Rotation::identity(), scale)
    }

    /// Converts an isometry into a transform with unit scale.
    #[inline]
    pub fn from_isometry(pos: &Isometry<Real>) -> Self {
        let position = pos.translation.vector.into();
        Self::new(position, pos.rotation, Vector::repeat(1.0))
    }

    /// The rotation and translation part of this transform, dropping the scale.
    #[inline]
    pub fn isometry(&self) -> Isometry<Real> {
        Isometry::from_parts(self.position.coords.into(), self.rotation)
    }

    /// Returns a copy of this transform translated by `shift`.
    #[inline]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.position += *shift;
        self
    }

    /// The largest absolute scale factor among the three axes.
    #[inline]
    pub fn max_scale(&self) -> Real {
        self.scale.abs().max()
    }

    /// Maps a point from the local frame to world-space: scale, then rotate, then translate.
    ///
    /// The order matters as soon as the scale is non-uniform.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        let scaled = pt.coords.component_mul(&self.scale);
        self.position + self.rotation * scaled
    }

    /// Maps a direction from the local frame to world-space.
    ///
    /// Only the rotation is applied. Normals are therefore not corrected for non-uniform
    /// scale (which would require the inverse-transpose of the scale), and are not
    /// re-normalized either.
    #[inline]
    pub fn transform_direction(&self, dir: &Vector<Real>) -> Vector<Real> {
        self.rotation * dir
    }
}

impl AbsDiffEq for RigidTransform {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
            && self.scale.abs_diff_eq(&other.scale, epsilon)
    }
}

impl RelativeEq for RigidTransform {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, eps: Self::Epsilon, max_rel: Self::Epsilon) -> bool {
        self.position.relative_eq(&other.position, eps, max_rel)
            && self.rotation.relative_eq(&other.rotation, eps, max_rel)
            && self.scale.relative_eq(&other.scale, eps, max_rel)
    }
}
