use crate::bounding_volume::{triangle_aabb, Aabb};
use crate::math::{Point, Real};
use crate::query::{
    point_triangle_projection, ray_triangle_intersection, PrimitiveIntersection, Ray,
};
use crate::shape::PrimitiveSet;

/// A triangle mesh view: index triples over a shared position buffer.
///
/// Per-vertex radii are optional; they give triangles a thickness for
/// point-projection queries only (ray tests and bounds treat triangles as
/// infinitely thin, matching the usual mesh interpretation).
#[derive(Copy, Clone, Debug)]
pub struct TriangleSet<'a> {
    positions: &'a [Point<Real>],
    radius: Option<&'a [Real]>,
    triangles: &'a [[u32; 3]],
}

impl<'a> TriangleSet<'a> {
    /// Creates a triangle-set view without vertex radii.
    pub fn new(positions: &'a [Point<Real>], triangles: &'a [[u32; 3]]) -> Self {
        Self {
            positions,
            radius: None,
            triangles,
        }
    }

    /// Creates a triangle-set view with per-vertex radii (as long as
    /// `positions`).
    pub fn with_radius(
        positions: &'a [Point<Real>],
        radius: &'a [Real],
        triangles: &'a [[u32; 3]],
    ) -> Self {
        Self {
            positions,
            radius: Some(radius),
            triangles,
        }
    }

    #[inline]
    fn vertex_radius(&self, vertex: u32) -> Real {
        self.radius.map_or(0.0, |r| r[vertex as usize])
    }
}

impl PrimitiveSet for TriangleSet<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    fn primitive_aabb(&self, primitive: u32) -> Aabb {
        let [a, b, c] = self.triangles[primitive as usize];
        triangle_aabb(
            &self.positions[a as usize],
            &self.positions[b as usize],
            &self.positions[c as usize],
        )
    }

    #[inline]
    fn cast_local_ray(&self, primitive: u32, ray: &Ray) -> Option<PrimitiveIntersection> {
        let [a, b, c] = self.triangles[primitive as usize];
        ray_triangle_intersection(
            ray,
            &self.positions[a as usize],
            &self.positions[b as usize],
            &self.positions[c as usize],
        )
    }

    #[inline]
    fn project_local_point(
        &self,
        primitive: u32,
        pt: &Point<Real>,
        max_distance: Real,
    ) -> Option<PrimitiveIntersection> {
        let [a, b, c] = self.triangles[primitive as usize];
        point_triangle_projection(
            pt,
            max_distance,
            &self.positions[a as usize],
            &self.positions[b as usize],
            &self.positions[c as usize],
            self.vertex_radius(a),
            self.vertex_radius(b),
            self.vertex_radius(c),
        )
    }
}
