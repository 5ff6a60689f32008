//! Broad-phase collaborators: the query interface consumed by the overlap queries, and a
//! brute-force reference implementation.

pub use self::broad_phase::{BroadPhase, ColliderRef, LayerMask, QueryTriggerInteraction};
pub use self::collider_set::{Collider, ColliderHandle, ColliderSet};

mod broad_phase;
mod collider_set;
