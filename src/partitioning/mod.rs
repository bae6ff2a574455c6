//! Spatial partitioning structures: the BVH and the uniform hash grid.

pub use self::bvh::{Bvh, BvhNode, LEAF_MAX_PRIMITIVES};
pub use self::hash_grid::HashGrid;

mod bvh;
mod hash_grid;
