use overlap3d::bounding_volume::Aabb;
use overlap3d::math::{Point, Vector};
use overlap3d::partitioning::{
    Collider, ColliderHandle, ColliderSet, LayerMask, QueryTriggerInteraction,
};
use overlap3d::query::{self, OverlapError};
use overlap3d::shape::{Ball, Capsule, ColliderShape, ConvexMesh, Cuboid, MeshCollider};
use overlap3d::transform::RigidTransform;
use std::sync::Arc;

struct Scene {
    set: ColliderSet,
    origin: ColliderHandle,
    cube: ColliderHandle,
    ball: ColliderHandle,
    capsule: ColliderHandle,
    far: ColliderHandle,
    trigger: ColliderHandle,
    other_layer: ColliderHandle,
    custom: ColliderHandle,
    collider: MeshCollider,
}

fn scene() -> Scene {
    let mesh = Arc::new(ConvexMesh::cube(Vector::repeat(1.0)));
    let transform = RigidTransform::identity();
    let mut set = ColliderSet::new();

    let origin = set.insert(ColliderShape::ConvexMesh(mesh.clone()), transform);
    let cube = set.insert(
        Cuboid::new(Vector::repeat(0.5)),
        RigidTransform::from_position(Point::new(1.4, 0.0, 0.0)),
    );
    let ball = set.insert(
        Ball::new(0.5),
        RigidTransform::from_position(Point::new(1.2, 1.2, 1.2)),
    );
    let capsule = set.insert(
        Capsule::new_y(3.0, 0.25),
        RigidTransform::from_position(Point::new(1.1, 2.0, 1.1)),
    );
    let far = set.insert(
        Ball::new(0.5),
        RigidTransform::from_position(Point::new(10.0, 0.0, 0.0)),
    );
    let trigger = RigidTransform::from_position(Point::new(0.0, -1.2, 0.0));
    let trigger = Collider::new(Cuboid::new(Vector::repeat(0.5)), trigger).with_trigger(true);
    let trigger = set.insert_collider(trigger);
    let other_layer = Collider::new(Ball::new(2.0), transform).with_layers(LayerMask::layer(5));
    let other_layer = set.insert_collider(other_layer);
    let custom = set.insert(
        ColliderShape::Custom {
            id: 1,
            local_aabb: Aabb::from_half_extents(Point::origin(), Vector::repeat(1.0)),
        },
        transform,
    );

    Scene {
        set,
        origin,
        cube,
        ball,
        capsule,
        far,
        trigger,
        other_layer,
        custom,
        collider: MeshCollider::new(mesh, transform),
    }
}

impl Scene {
    fn run(&self, layers: LayerMask, triggers: QueryTriggerInteraction) -> Vec<ColliderHandle> {
        let mut candidates = [ColliderHandle::default(); 16];
        let mut results = [ColliderHandle::default(); 16];
        let n = query::overlap_mesh_collider(
            &self.collider,
            &self.set,
            &mut candidates,
            &mut results,
            layers,
            triggers,
        );
        results[..n].to_vec()
    }
}

#[test]
fn overlap_reports_every_overlapping_shape_in_order() {
    let scene = scene();
    let hits = scene.run(LayerMask::DEFAULT, QueryTriggerInteraction::UseGlobal);
    let expected = [
        scene.origin,
        scene.cube,
        scene.ball,
        scene.capsule,
        scene.trigger,
    ];
    assert_eq!(hits, expected);
    assert!(!hits.contains(&scene.far));
    assert!(!hits.contains(&scene.custom));
}

#[test]
fn overlap_honors_layers_and_triggers() {
    let mut scene = scene();

    let hits = scene.run(LayerMask::DEFAULT, QueryTriggerInteraction::Ignore);
    assert!(!hits.contains(&scene.trigger));

    let hits = scene.run(LayerMask::layer(5), QueryTriggerInteraction::Collide);
    assert_eq!(hits, [scene.other_layer]);

    scene.set.queries_hit_triggers = false;
    let hits = scene.run(LayerMask::all(), QueryTriggerInteraction::UseGlobal);
    assert!(!hits.contains(&scene.trigger));
    assert!(hits.contains(&scene.other_layer));

    let hits = scene.run(LayerMask::empty(), QueryTriggerInteraction::Collide);
    assert!(hits.is_empty());
}

#[test]
fn results_are_bounded_by_capacity() {
    let scene = scene();
    let mut candidates = [ColliderHandle::default(); 16];
    let mut results = [ColliderHandle::default(); 2];
    let n = query::overlap_mesh_collider(
        &scene.collider,
        &scene.set,
        &mut candidates,
        &mut results,
        LayerMask::DEFAULT,
        QueryTriggerInteraction::UseGlobal,
    );
    assert_eq!(n, 2);
    assert_eq!(results, [scene.origin, scene.cube]);
}

#[test]
fn non_convex_collider_reports_nothing() {
    let scene = scene();
    let collider = scene.collider.clone().with_convex(false);
    let mut candidates = [ColliderHandle::default(); 16];
    let mut results = [ColliderHandle::default(); 16];

    assert_eq!(
        query::try_overlap_mesh_collider(
            &collider,
            &scene.set,
            &mut candidates,
            &mut results,
            LayerMask::all(),
            QueryTriggerInteraction::Collide,
        ),
        Err(OverlapError::NonConvexMesh)
    );
    assert_eq!(
        query::overlap_mesh_collider(
            &collider,
            &scene.set,
            &mut candidates,
            &mut results,
            LayerMask::all(),
            QueryTriggerInteraction::Collide,
        ),
        0
    );
}
