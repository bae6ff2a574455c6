use crate::math::{Point, Real, Vector2};
use crate::query::ray::ray_triangle_intersection;
use crate::query::{PrimitiveIntersection, Ray};

/// Intersection between a ray and the quad `(a, b, c, d)`, triangulated as
/// `(a, b, d)` and `(c, d, b)`.
///
/// A quad with `c == d` encodes a triangle and is tested as one. On the
/// second triangle the parametric coordinates are flipped to `1 - uv` so the
/// quad has a single continuous parameterization.
pub fn ray_quad_intersection(
    ray: &Ray,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Option<PrimitiveIntersection> {
    if c == d {
        return ray_triangle_intersection(ray, a, b, d);
    }

    let hit1 = ray_triangle_intersection(ray, a, b, d);
    let hit2 = ray_triangle_intersection(ray, c, d, b)
        .map(|hit| PrimitiveIntersection::new(Vector2::repeat(1.0) - hit.uv, hit.distance));

    match (hit1, hit2) {
        (Some(h1), Some(h2)) => Some(if h1.distance <= h2.distance { h1 } else { h2 }),
        (h1, h2) => h1.or(h2),
    }
}
