//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_mesh_ball::intersection_test_mesh_ball;
pub use self::intersection_test_mesh_capsule::intersection_test_mesh_capsule;
pub use self::intersection_test_mesh_cuboid::intersection_test_mesh_cuboid;
pub use self::intersection_test_mesh_mesh::intersection_test_mesh_mesh;

mod intersection_test_mesh_ball;
mod intersection_test_mesh_capsule;
mod intersection_test_mesh_cuboid;
mod intersection_test_mesh_mesh;
