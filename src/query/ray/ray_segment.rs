use crate::math::{Point, Real, Vector2};
use crate::query::{PrimitiveIntersection, Ray};

/// Intersection between a ray and a segment with per-vertex radii (a round
/// cone-capsule, as used for hair and curve rendering).
///
/// Solves for the closest approach between the ray and the infinite line,
/// clamps to the segment, then compares against the radius interpolated at
/// the clamped parameter. `uv.x` is the segment parameter, `uv.y` the radial
/// offset normalized by the local radius.
pub fn ray_segment_intersection(
    ray: &Ray,
    a: &Point<Real>,
    b: &Point<Real>,
    radius_a: Real,
    radius_b: Real,
) -> Option<PrimitiveIntersection> {
    let u = ray.dir;
    let v = b - a;
    let w = ray.origin - a;

    // Coefficients of the two-parameter closest-approach linear system.
    let uu = u.dot(&u);
    let uv = u.dot(&v);
    let vv = v.dot(&v);
    let uw = u.dot(&w);
    let vw = v.dot(&w);
    let det = uu * vv - uv * uv;
    if det == 0.0 {
        // Ray parallel to the segment: no isolated closest point.
        return None;
    }

    let t = (uv * vw - vv * uw) / det;
    let s = (uu * vw - uv * uw) / det;
    if t < ray.tmin || t > ray.tmax {
        return None;
    }

    let s = s.clamp(0.0, 1.0);
    let on_ray = ray.point_at(t);
    let on_segment = a + v * s;
    let d2 = (on_ray - on_segment).norm_squared();
    let radius = radius_a * (1.0 - s) + radius_b * s;
    if d2 > radius * radius {
        return None;
    }

    Some(PrimitiveIntersection::new(
        Vector2::new(s, d2.sqrt() / radius),
        t,
    ))
}
