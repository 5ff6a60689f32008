use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Cuboid;

/// Indicates an inconsistency while building a convex mesh with [`ConvexMesh::try_new`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvexMeshError {
    /// A convex mesh must contain at least one vertex.
    #[error("a convex mesh must contain at least one vertex.")]
    EmptyVertices,
    /// A convex mesh must contain at least one normal.
    #[error("a convex mesh must contain at least one normal.")]
    EmptyNormals,
    /// A vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(u32),
    /// A normal has a NaN or infinite coordinate.
    #[error("the normal {0} has a non-finite coordinate.")]
    NonFiniteNormal(u32),
}

/// A convex polyhedron given by its vertices and the normals of its faces.
///
/// The normals are the candidate separating axes contributed by this mesh. They can be
/// one per face or one per vertex, and do not need to be normalized.
///
/// The vertices must describe a convex hull. This is not checked: a concave mesh gives
/// silently wrong answers.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexMesh {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    local_aabb: Aabb,
}

impl ConvexMesh {
    /// Creates a convex mesh without validating its input.
    ///
    /// Empty vertex or normal sets are accepted; such a mesh never overlaps anything.
    pub fn new(vertices: Vec<Point<Real>>, normals: Vec<Vector<Real>>) -> Self {
        let local_aabb = Aabb::from_points(&vertices);
        Self {
            vertices,
            normals,
            local_aabb,
        }
    }

    /// Creates a convex mesh, checking it is not empty and only has finite coordinates.
    pub fn try_new(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
    ) -> Result<Self, ConvexMeshError> {
        if vertices.is_empty() {
            return Err(ConvexMeshError::EmptyVertices);
        }

        if normals.is_empty() {
            return Err(ConvexMeshError::EmptyNormals);
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| !pt.coords.iter().all(|e| e.is_finite()))
        {
            return Err(ConvexMeshError::NonFiniteVertex(i as u32));
        }

        if let Some(i) = normals
            .iter()
            .position(|n| !n.iter().all(|e| e.is_finite()))
        {
            return Err(ConvexMeshError::NonFiniteNormal(i as u32));
        }

        Ok(Self::new(vertices, normals))
    }

    /// The convex mesh of a box with the given half-extents.
    pub fn cube(half_extents: Vector<Real>) -> Self {
        Self::from(&Cuboid::new(half_extents))
    }

    /// The vertices of this mesh, in its local frame.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The normals of this mesh, in its local frame.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The AABB of the vertices of this mesh, in its local frame.
    ///
    /// Invalid (see [`Aabb::is_valid`]) if the mesh has no vertex.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// Does this mesh lack the vertices or the normals needed to overlap anything?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.normals.is_empty()
    }
}

impl From<&Cuboid> for ConvexMesh {
    fn from(cuboid: &Cuboid) -> Self {
        Self::new(
            cuboid.local_vertices().to_vec(),
            cuboid.local_face_normals().to_vec(),
        )
    }
}
