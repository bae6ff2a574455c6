use crate::math::{Point, Real, Vector2};
use crate::query::{PrimitiveIntersection, Ray};

/// Intersection between a ray and a triangle, using the Möller–Trumbore
/// algorithm.
///
/// `uv` holds the barycentric coordinates of the hit with respect to `b` and
/// `c` (the weight of `a` is `1 - u - v`).
pub fn ray_triangle_intersection(
    ray: &Ray,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<PrimitiveIntersection> {
    let edge1 = b - a;
    let edge2 = c - a;

    let pvec = ray.dir.cross(&edge2);
    let det = edge1.dot(&pvec);
    if det == 0.0 {
        // Ray parallel to the triangle plane.
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - a;
    let u = tvec.dot(&pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = ray.dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(&qvec) * inv_det;
    if t < ray.tmin || t > ray.tmax {
        return None;
    }

    Some(PrimitiveIntersection::new(Vector2::new(u, v), t))
}
