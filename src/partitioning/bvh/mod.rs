pub use self::bvh_build::LEAF_MAX_PRIMITIVES;
pub use self::bvh_tree::{Bvh, BvhNode};

mod bvh_build;
mod bvh_queries;
mod bvh_refit;
#[cfg(test)]
mod bvh_tests;
mod bvh_tree;
mod bvh_validation;
