use crate::bounding_volume::{quad_aabb, Aabb};
use crate::math::{Point, Real};
use crate::query::{point_quad_projection, ray_quad_intersection, PrimitiveIntersection, Ray};
use crate::shape::PrimitiveSet;

/// A quad mesh view: index quadruples over a shared position buffer.
///
/// A quad whose 3rd and 4th indices are equal encodes a triangle; mixed
/// triangle/quad meshes use this convention instead of a separate triangle
/// list. Per-vertex radii are optional, as for
/// [`TriangleSet`](crate::shape::TriangleSet).
#[derive(Copy, Clone, Debug)]
pub struct QuadSet<'a> {
    positions: &'a [Point<Real>],
    radius: Option<&'a [Real]>,
    quads: &'a [[u32; 4]],
}

impl<'a> QuadSet<'a> {
    /// Creates a quad-set view without vertex radii.
    pub fn new(positions: &'a [Point<Real>], quads: &'a [[u32; 4]]) -> Self {
        Self {
            positions,
            radius: None,
            quads,
        }
    }

    /// Creates a quad-set view with per-vertex radii (as long as
    /// `positions`).
    pub fn with_radius(
        positions: &'a [Point<Real>],
        radius: &'a [Real],
        quads: &'a [[u32; 4]],
    ) -> Self {
        Self {
            positions,
            radius: Some(radius),
            quads,
        }
    }

    #[inline]
    fn vertex_radius(&self, vertex: u32) -> Real {
        self.radius.map_or(0.0, |r| r[vertex as usize])
    }
}

impl PrimitiveSet for QuadSet<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    fn primitive_aabb(&self, primitive: u32) -> Aabb {
        let [a, b, c, d] = self.quads[primitive as usize];
        quad_aabb(
            &self.positions[a as usize],
            &self.positions[b as usize],
            &self.positions[c as usize],
            &self.positions[d as usize],
        )
    }

    #[inline]
    fn cast_local_ray(&self, primitive: u32, ray: &Ray) -> Option<PrimitiveIntersection> {
        let [a, b, c, d] = self.quads[primitive as usize];
        ray_quad_intersection(
            ray,
            &self.positions[a as usize],
            &self.positions[b as usize],
            &self.positions[c as usize],
            &self.positions[d as usize],
        )
    }

    #[inline]
    fn project_local_point(
        &self,
        primitive: u32,
        pt: &Point<Real>,
        max_distance: Real,
    ) -> Option<PrimitiveIntersection> {
        let [a, b, c, d] = self.quads[primitive as usize];
        point_quad_projection(
            pt,
            max_distance,
            &self.positions[a as usize],
            &self.positions[b as usize],
            &self.positions[c as usize],
            &self.positions[d as usize],
            self.vertex_radius(a),
            self.vertex_radius(b),
            self.vertex_radius(c),
            self.vertex_radius(d),
        )
    }
}
