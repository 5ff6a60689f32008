use crate::bounding_volume::OrientedBox;
use crate::shape::TypedShape;
use crate::transform::RigidTransform;

bitflags::bitflags! {
    /// A set of collision layers.
    ///
    /// A collider belongs to one or several layers; a query only considers colliders
    /// belonging to at least one of the layers of its mask.
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// The layer colliders belong to unless told otherwise.
        const DEFAULT = 1 << 0;
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::DEFAULT
    }
}

impl LayerMask {
    /// The mask containing only the `index`-th layer.
    ///
    /// Returns an empty mask if `index >= 32`.
    pub fn layer(index: u32) -> Self {
        Self::from_bits_retain(1u32.checked_shl(index).unwrap_or(0))
    }
}

/// Whether a broad-phase query reports trigger colliders.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum QueryTriggerInteraction {
    /// Use the broad-phase's global setting.
    #[default]
    UseGlobal,
    /// Never report triggers.
    Ignore,
    /// Always report triggers.
    Collide,
}

/// A view of a collider handed out by a broad-phase: its placement and its shape.
#[derive(Copy, Clone, Debug)]
pub struct ColliderRef<'a> {
    /// The world-space placement of the collider.
    pub transform: RigidTransform,
    /// The shape of the collider.
    pub shape: TypedShape<'a>,
}

/// A coarse spatial query shortlisting the colliders that may overlap a volume.
///
/// The overlap queries only rely on this trait: the broad-phase may report colliders that
/// do not actually touch the volume, but must not miss any that do.
pub trait BroadPhase {
    /// The identifier of a collider in this broad-phase.
    type Handle: Copy;

    /// Writes into `out` the handles of the colliders whose bounds intersect `query`,
    /// filtered by `layers` and `triggers`.
    ///
    /// At most `out.len()` handles are written; the others are dropped. Returns the number
    /// of handles written.
    fn overlap_box(
        &self,
        query: &OrientedBox,
        layers: LayerMask,
        triggers: QueryTriggerInteraction,
        out: &mut [Self::Handle],
    ) -> usize;

    /// The placement and shape of the collider identified by `handle`, if it exists.
    fn collider(&self, handle: Self::Handle) -> Option<ColliderRef<'_>>;
}
