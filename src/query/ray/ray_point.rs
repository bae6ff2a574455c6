use crate::math::{Point, Real, Vector2};
use crate::query::{PrimitiveIntersection, Ray};

/// Intersection between a ray and a point with a per-vertex radius (a small
/// sphere centered at `center`).
///
/// The reported parameter is the ray's closest approach to the center, not
/// the sphere surface; `uv` is always zero.
pub fn ray_point_intersection(
    ray: &Ray,
    center: &Point<Real>,
    radius: Real,
) -> Option<PrimitiveIntersection> {
    // Ray parameter of the closest approach to the center.
    let w = center - ray.origin;
    let t = w.dot(&ray.dir) / ray.dir.norm_squared();
    if t < ray.tmin || t > ray.tmax {
        return None;
    }

    let closest = ray.point_at(t);
    if (center - closest).norm_squared() > radius * radius {
        return None;
    }

    Some(PrimitiveIntersection::new(Vector2::zeros(), t))
}
