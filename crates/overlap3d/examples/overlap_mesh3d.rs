use overlap3d::math::{Point, Rotation, Vector};
use overlap3d::partitioning::{
    Collider, ColliderHandle, ColliderSet, LayerMask, QueryTriggerInteraction,
};
use overlap3d::query;
use overlap3d::shape::{Ball, Capsule, ConvexMesh, Cuboid, MeshCollider};
use overlap3d::transform::RigidTransform;

const CHECK_LIMIT: usize = 30;

fn main() {
    /*
     * The scene.
     */
    let mut colliders = ColliderSet::new();
    let names = [
        "crate",
        "boulder",
        "pillar",
        "far away boulder",
        "pressure plate (trigger)",
    ];
    let _ = colliders.insert(
        Cuboid::new(Vector::new(0.5, 0.5, 0.5)),
        RigidTransform::from_position_rotation(
            Point::new(1.6, 0.0, 0.0),
            Rotation::from_axis_angle(&Vector::y_axis(), 0.6),
        ),
    );
    let _ = colliders.insert(
        Ball::new(0.75),
        RigidTransform::from_position(Point::new(-1.3, 1.3, 0.0)),
    );
    let _ = colliders.insert(
        Capsule::new_y(4.0, 0.3),
        RigidTransform::from_position(Point::new(0.0, 0.0, 1.2)),
    );
    let _ = colliders.insert(
        Ball::new(0.75),
        RigidTransform::from_position(Point::new(8.0, 0.0, 0.0)),
    );
    let _ = colliders.insert_collider(
        Collider::new(
            Cuboid::new(Vector::new(2.0, 0.1, 2.0)),
            RigidTransform::from_position(Point::new(0.0, -1.05, 0.0)),
        )
        .with_trigger(true),
    );

    /*
     * The query, a convex mesh shaped like an elongated box.
     */
    let mesh = ConvexMesh::cube(Vector::new(1.0, 1.0, 1.0));
    let collider = MeshCollider::new(
        mesh,
        RigidTransform::new(
            Point::origin(),
            Rotation::identity(),
            Vector::new(1.2, 1.0, 1.0),
        ),
    );

    let mut overlap_bounds = [ColliderHandle::default(); CHECK_LIMIT];
    let mut overlap_meshes = [ColliderHandle::default(); CHECK_LIMIT];

    for triggers in [
        QueryTriggerInteraction::Collide,
        QueryTriggerInteraction::Ignore,
    ] {
        let count = query::overlap_mesh_collider(
            &collider,
            &colliders,
            &mut overlap_bounds,
            &mut overlap_meshes,
            LayerMask::all(),
            triggers,
        );

        println!("Query with {:?}:", triggers);

        if count == 0 {
            println!("  no overlapping collider");
        } else {
            for handle in &overlap_meshes[..count] {
                let name = names[handle.0 as usize];
                println!("  overlapping collider {:?}: {}", handle, name);
            }
        }
    }
}
