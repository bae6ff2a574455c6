//! Bounding volumes.

#[doc(inline)]
pub use self::aabb::Aabb;
pub use self::aabb_primitives::{point_aabb, quad_aabb, segment_aabb, triangle_aabb};

#[doc(hidden)]
pub mod aabb;
mod aabb_primitives;
