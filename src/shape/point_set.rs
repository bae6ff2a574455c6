use crate::bounding_volume::{point_aabb, Aabb};
use crate::math::{Point, Real};
use crate::query::{point_point_projection, ray_point_intersection, PrimitiveIntersection, Ray};
use crate::shape::PrimitiveSet;

/// A set of points with per-vertex radii, indexed into a shared position
/// buffer.
#[derive(Copy, Clone, Debug)]
pub struct PointSet<'a> {
    positions: &'a [Point<Real>],
    radius: &'a [Real],
    points: &'a [u32],
}

impl<'a> PointSet<'a> {
    /// Creates a point-set view. `radius` is per-vertex and must be as long
    /// as `positions`.
    pub fn new(positions: &'a [Point<Real>], radius: &'a [Real], points: &'a [u32]) -> Self {
        Self {
            positions,
            radius,
            points,
        }
    }
}

impl PrimitiveSet for PointSet<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn primitive_aabb(&self, primitive: u32) -> Aabb {
        let v = self.points[primitive as usize] as usize;
        point_aabb(&self.positions[v], self.radius[v])
    }

    #[inline]
    fn cast_local_ray(&self, primitive: u32, ray: &Ray) -> Option<PrimitiveIntersection> {
        let v = self.points[primitive as usize] as usize;
        ray_point_intersection(ray, &self.positions[v], self.radius[v])
    }

    #[inline]
    fn project_local_point(
        &self,
        primitive: u32,
        pt: &Point<Real>,
        max_distance: Real,
    ) -> Option<PrimitiveIntersection> {
        let v = self.points[primitive as usize] as usize;
        point_point_projection(pt, max_distance, &self.positions[v], self.radius[v])
    }
}
