//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::oriented_box::OrientedBox;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod oriented_box;
