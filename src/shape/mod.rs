//! Primitive-set views over caller-owned geometry buffers.

pub use self::point_set::PointSet;
pub use self::quad_set::QuadSet;
pub use self::segment_set::SegmentSet;
pub use self::triangle_set::TriangleSet;

mod point_set;
mod quad_set;
mod segment_set;
mod triangle_set;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{PrimitiveIntersection, Ray};

/// A set of indexable geometric primitives sharing a vertex buffer.
///
/// This is the seam between the kind-agnostic BVH traversal and the four
/// primitive kinds (points, segments, triangles, quads): the tree only ever
/// addresses geometry through this trait, so one generic traversal serves
/// every kind by monomorphization.
///
/// Implementors are thin borrowed views; the caller owns the position, radius
/// and index buffers and is responsible for rebuilding or refitting any
/// [`Bvh`](crate::partitioning::Bvh) indexing them after a change.
pub trait PrimitiveSet {
    /// The number of primitives in the set.
    fn len(&self) -> usize;

    /// Whether the set contains no primitives.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bounds of one primitive, recomputed from the live buffers.
    fn primitive_aabb(&self, primitive: u32) -> Aabb;

    /// The bounds of every primitive, in primitive order.
    ///
    /// This is the leaf array fed to
    /// [`Bvh::from_leaves`](crate::partitioning::Bvh::from_leaves) and
    /// [`Bvh::refit`](crate::partitioning::Bvh::refit).
    fn primitive_aabbs(&self) -> Vec<Aabb> {
        (0..self.len() as u32)
            .map(|i| self.primitive_aabb(i))
            .collect()
    }

    /// Casts a ray on one primitive. Honors `ray.tmin`/`ray.tmax`.
    fn cast_local_ray(&self, primitive: u32, ray: &Ray) -> Option<PrimitiveIntersection>;

    /// Projects `pt` on one primitive, accepting only hits within
    /// `max_distance`.
    fn project_local_point(
        &self,
        primitive: u32,
        pt: &Point<Real>,
        max_distance: Real,
    ) -> Option<PrimitiveIntersection>;
}
