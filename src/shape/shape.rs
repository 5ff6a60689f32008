use crate::bounding_volume::Aabb;
use crate::shape::{Ball, Capsule, ConvexMesh, Cuboid};
use crate::transform::RigidTransform;
use std::sync::Arc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A convex mesh shape.
    ConvexMesh = 0,
    /// A cuboid shape.
    Cuboid,
    /// A ball shape.
    Ball,
    /// A capsule shape.
    Capsule,
    /// A shape the overlap queries do not know how to test.
    Custom,
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A convex mesh shape.
    ConvexMesh(&'a ConvexMesh),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A ball shape.
    Ball(&'a Ball),
    /// A capsule shape.
    Capsule(&'a Capsule),
    /// A shape the overlap queries do not know how to test, identified by a number.
    Custom(u32),
}

impl TypedShape<'_> {
    /// The type tag of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            TypedShape::ConvexMesh(_) => ShapeType::ConvexMesh,
            TypedShape::Cuboid(_) => ShapeType::Cuboid,
            TypedShape::Ball(_) => ShapeType::Ball,
            TypedShape::Capsule(_) => ShapeType::Capsule,
            TypedShape::Custom(_) => ShapeType::Custom,
        }
    }
}

/// An owned shape attached to a collider.
///
/// Convex meshes are reference-counted so several colliders can share the same geometry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ColliderShape {
    /// A convex mesh shape.
    ConvexMesh(Arc<ConvexMesh>),
    /// A cuboid shape.
    Cuboid(Cuboid),
    /// A ball shape.
    Ball(Ball),
    /// A capsule shape.
    Capsule(Capsule),
    /// A shape the overlap queries do not know how to test.
    Custom {
        /// A user-defined identifier of the shape.
        id: u32,
        /// The bounds of the shape in its local frame, used by the broad-phase.
        local_aabb: Aabb,
    },
}

impl ColliderShape {
    /// Wraps a convex mesh.
    pub fn convex_mesh(mesh: ConvexMesh) -> Self {
        ColliderShape::ConvexMesh(Arc::new(mesh))
    }

    /// Gets the underlying shape as an enum of references.
    pub fn as_typed_shape(&self) -> TypedShape<'_> {
        match self {
            ColliderShape::ConvexMesh(mesh) => TypedShape::ConvexMesh(mesh),
            ColliderShape::Cuboid(cuboid) => TypedShape::Cuboid(cuboid),
            ColliderShape::Ball(ball) => TypedShape::Ball(ball),
            ColliderShape::Capsule(capsule) => TypedShape::Capsule(capsule),
            ColliderShape::Custom { id, .. } => TypedShape::Custom(*id),
        }
    }

    /// Gets the type tag of this shape.
    pub fn shape_type(&self) -> ShapeType {
        self.as_typed_shape().shape_type()
    }

    /// Computes the world-space AABB of this shape placed with `transform`.
    ///
    /// Balls and capsules are bounded after being resolved in world-space, so the bounds
    /// agree with the radius approximations used by the exact tests.
    pub fn compute_aabb(&self, transform: &RigidTransform) -> Aabb {
        match self {
            ColliderShape::ConvexMesh(mesh) => mesh.local_aabb().transform_by(transform),
            ColliderShape::Cuboid(cuboid) => cuboid.local_aabb().transform_by(transform),
            ColliderShape::Ball(ball) => ball.transform_by(transform).aabb(),
            ColliderShape::Capsule(capsule) => capsule.resolve(transform).aabb(),
            ColliderShape::Custom { local_aabb, .. } => local_aabb.transform_by(transform),
        }
    }
}

impl From<Cuboid> for ColliderShape {
    fn from(cuboid: Cuboid) -> Self {
        ColliderShape::Cuboid(cuboid)
    }
}

impl From<Ball> for ColliderShape {
    fn from(ball: Ball) -> Self {
        ColliderShape::Ball(ball)
    }
}

impl From<Capsule> for ColliderShape {
    fn from(capsule: Capsule) -> Self {
        ColliderShape::Capsule(capsule)
    }
}

impl From<ConvexMesh> for ColliderShape {
    fn from(mesh: ConvexMesh) -> Self {
        ColliderShape::convex_mesh(mesh)
    }
}
