use crate::math::{Point, Real, Vector};
use crate::transform::RigidTransform;

/// The closed interval covered by a point set projected onto an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionInterval {
    /// The smallest projection.
    pub min: Real,
    /// The largest projection.
    pub max: Real,
}

impl ProjectionInterval {
    /// The projection of an empty point set.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Real::MAX,
            max: -Real::MAX,
        }
    }

    /// Projects every point of `pts` onto `axis`.
    ///
    /// The axis does not need to be normalized: both intervals compared along the same
    /// axis are scaled by the same factor.
    pub fn from_points<I>(axis: &Vector<Real>, pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::empty();

        for pt in pts {
            let proj = pt.coords.dot(axis);
            result.min = result.min.min(proj);
            result.max = result.max.max(proj);
        }

        result
    }

    /// Did no point contribute to this interval?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Do the two intervals share at least one value?
    ///
    /// Intervals that only touch at one of their bounds intersect. An empty interval
    /// intersects nothing.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.min <= other.max && other.min <= self.max
    }
}

/// Does `axis` fail to separate the two vertex sets, each given in its local frame?
///
/// Every vertex is moved to world-space with its transform before being projected onto
/// the world-space `axis`. Returns `false` if either vertex set is empty.
///
/// # Example
///
/// ```
/// use overlap3d::math::{Point, Vector};
/// use overlap3d::query::sat::axes_overlap;
/// use overlap3d::shape::Cuboid;
/// use overlap3d::transform::RigidTransform;
///
/// let cube = Cuboid::new(Vector::repeat(1.0)).local_vertices();
/// let here = RigidTransform::identity();
/// let there = RigidTransform::from_position(Point::new(3.0, 0.0, 0.0));
///
/// assert!(!axes_overlap(&Vector::x(), &cube, &here, &cube, &there));
/// assert!(axes_overlap(&Vector::y(), &cube, &here, &cube, &there));
/// ```
pub fn axes_overlap(
    axis: &Vector<Real>,
    vertices1: &[Point<Real>],
    transform1: &RigidTransform,
    vertices2: &[Point<Real>],
    transform2: &RigidTransform,
) -> bool {
    let proj1 = ProjectionInterval::from_points(
        axis,
        vertices1.iter().map(|pt| transform1.transform_point(pt)),
    );
    let proj2 = ProjectionInterval::from_points(
        axis,
        vertices2.iter().map(|pt| transform2.transform_point(pt)),
    );
    proj1.intersects(&proj2)
}

/// Does `axis` fail to separate the two vertex sets, both already in world-space?
pub fn world_axes_overlap(
    axis: &Vector<Real>,
    points1: &[Point<Real>],
    points2: &[Point<Real>],
) -> bool {
    let proj1 = ProjectionInterval::from_points(axis, points1.iter().copied());
    let proj2 = ProjectionInterval::from_points(axis, points2.iter().copied());
    proj1.intersects(&proj2)
}
