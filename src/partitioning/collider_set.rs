use crate::bounding_volume::OrientedBox;
use crate::partitioning::{BroadPhase, ColliderRef, LayerMask, QueryTriggerInteraction};
use crate::shape::ColliderShape;
use crate::transform::RigidTransform;

/// The identifier of a collider inserted into a [`ColliderSet`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColliderHandle(pub u32);

/// A shape placed in the world, with its broad-phase filtering data.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Collider {
    /// The shape of the collider.
    pub shape: ColliderShape,
    /// The world-space placement of the collider.
    pub transform: RigidTransform,
    /// The layers this collider belongs to.
    pub layers: LayerMask,
    /// Is this collider a trigger volume?
    pub is_trigger: bool,
}

impl Collider {
    /// A non-trigger collider on the default layer.
    pub fn new(shape: impl Into<ColliderShape>, transform: RigidTransform) -> Self {
        Self {
            shape: shape.into(),
            transform,
            layers: LayerMask::DEFAULT,
            is_trigger: false,
        }
    }

    /// Sets the layers of this collider.
    pub fn with_layers(mut self, layers: LayerMask) -> Self {
        self.layers = layers;
        self
    }

    /// Marks this collider as a trigger volume.
    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }
}

/// A flat list of colliders queried by brute force.
///
/// Every query tests the world-space AABB of every collider against the AABB of the query
/// box. This is exact enough to never miss a candidate, and meant for tests, tools, and
/// scenes small enough not to need a real acceleration structure.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
    /// Whether queries using [`QueryTriggerInteraction::UseGlobal`] report triggers.
    pub queries_hit_triggers: bool,
}

impl Default for ColliderSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ColliderSet {
    /// An empty set, reporting triggers by default.
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            queries_hit_triggers: true,
        }
    }

    /// Inserts a non-trigger collider on the default layer.
    pub fn insert(
        &mut self,
        shape: impl Into<ColliderShape>,
        transform: RigidTransform,
    ) -> ColliderHandle {
        self.insert_collider(Collider::new(shape, transform))
    }

    /// Inserts a collider.
    pub fn insert_collider(&mut self, collider: Collider) -> ColliderHandle {
        let handle = ColliderHandle(self.colliders.len() as u32);
        self.colliders.push(collider);
        handle
    }

    /// The collider identified by `handle`.
    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle.0 as usize)
    }

    /// The number of colliders in this set.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterates through all the colliders and their handles.
    pub fn iter(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders
            .iter()
            .enumerate()
            .map(|(i, c)| (ColliderHandle(i as u32), c))
    }

    fn accepts(
        &self,
        collider: &Collider,
        layers: LayerMask,
        triggers: QueryTriggerInteraction,
    ) -> bool {
        if !collider.layers.intersects(layers) {
            return false;
        }

        !collider.is_trigger
            || match triggers {
                QueryTriggerInteraction::UseGlobal => self.queries_hit_triggers,
                QueryTriggerInteraction::Ignore => false,
                QueryTriggerInteraction::Collide => true,
            }
    }
}

impl BroadPhase for ColliderSet {
    type Handle = ColliderHandle;

    fn overlap_box(
        &self,
        query: &OrientedBox,
        layers: LayerMask,
        triggers: QueryTriggerInteraction,
        out: &mut [ColliderHandle],
    ) -> usize {
        let query_aabb = query.aabb();
        let mut count = 0;

        for (handle, collider) in self.iter() {
            if count == out.len() {
                break;
            }

            if !self.accepts(collider, layers, triggers) {
                continue;
            }

            let aabb = collider.shape.compute_aabb(&collider.transform);
            if aabb.intersects(&query_aabb) {
                out[count] = handle;
                count += 1;
            }
        }

        count
    }

    fn collider(&self, handle: ColliderHandle) -> Option<ColliderRef<'_>> {
        self.get(handle).map(|c| ColliderRef {
            transform: c.transform,
            shape: c.shape.as_typed_shape(),
        })
    }
}
