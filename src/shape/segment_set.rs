use crate::bounding_volume::{segment_aabb, Aabb};
use crate::math::{Point, Real};
use crate::query::{
    point_segment_projection, ray_segment_intersection, PrimitiveIntersection, Ray,
};
use crate::shape::PrimitiveSet;

/// A set of line segments with per-vertex radii, indexed into a shared
/// position buffer.
#[derive(Copy, Clone, Debug)]
pub struct SegmentSet<'a> {
    positions: &'a [Point<Real>],
    radius: &'a [Real],
    segments: &'a [[u32; 2]],
}

impl<'a> SegmentSet<'a> {
    /// Creates a segment-set view. `radius` is per-vertex and must be as long
    /// as `positions`.
    pub fn new(positions: &'a [Point<Real>], radius: &'a [Real], segments: &'a [[u32; 2]]) -> Self {
        Self {
            positions,
            radius,
            segments,
        }
    }
}

impl PrimitiveSet for SegmentSet<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    fn primitive_aabb(&self, primitive: u32) -> Aabb {
        let [a, b] = self.segments[primitive as usize];
        segment_aabb(
            &self.positions[a as usize],
            &self.positions[b as usize],
            self.radius[a as usize],
            self.radius[b as usize],
        )
    }

    #[inline]
    fn cast_local_ray(&self, primitive: u32, ray: &Ray) -> Option<PrimitiveIntersection> {
        let [a, b] = self.segments[primitive as usize];
        ray_segment_intersection(
            ray,
            &self.positions[a as usize],
            &self.positions[b as usize],
            self.radius[a as usize],
            self.radius[b as usize],
        )
    }

    #[inline]
    fn project_local_point(
        &self,
        primitive: u32,
        pt: &Point<Real>,
        max_distance: Real,
    ) -> Option<PrimitiveIntersection> {
        let [a, b] = self.segments[primitive as usize];
        point_segment_projection(
            pt,
            max_distance,
            &self.positions[a as usize],
            &self.positions[b as usize],
            self.radius[a as usize],
            self.radius[b as usize],
        )
    }
}
