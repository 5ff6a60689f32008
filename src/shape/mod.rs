//! Shapes supported by overlap3d.

pub use self::ball::Ball;
pub use self::capsule::{Capsule, CapsuleAxis, CapsuleSegment};
pub use self::convex_mesh::{ConvexMesh, ConvexMeshError};
pub use self::cuboid::Cuboid;
pub use self::mesh_collider::MeshCollider;
#[doc(inline)]
pub use self::shape::{ColliderShape, ShapeType, TypedShape};

mod ball;
mod capsule;
mod convex_mesh;
mod cuboid;
mod mesh_collider;
mod shape;
