use crate::math::{Point, Real, Vector2};
use crate::query::PrimitiveIntersection;

/// Parameter in `[0, 1]` of the point on segment `[a, b]` closest to `pt`.
///
/// A degenerate segment (`a == b`) projects on `a`.
pub(crate) fn closest_segment_param(pt: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Real {
    let ab = b - a;
    let sq_len = ab.norm_squared();
    if sq_len == 0.0 {
        return 0.0;
    }

    ((pt - a).dot(&ab) / sq_len).clamp(0.0, 1.0)
}

/// Projection of `pt` on a segment with per-vertex radii, accepted when the
/// closest point lies within `max_distance + radius` of `pt` with the radius
/// interpolated at the projection parameter.
pub fn point_segment_projection(
    pt: &Point<Real>,
    max_distance: Real,
    a: &Point<Real>,
    b: &Point<Real>,
    radius_a: Real,
    radius_b: Real,
) -> Option<PrimitiveIntersection> {
    let u = closest_segment_param(pt, a, b);
    let on_segment = a + (b - a) * u;
    let radius = radius_a + (radius_b - radius_a) * u;
    let d2 = (pt - on_segment).norm_squared();
    let reach = max_distance + radius;
    if d2 > reach * reach {
        return None;
    }

    Some(PrimitiveIntersection::new(Vector2::new(u, 0.0), d2.sqrt()))
}

#[cfg(test)]
mod test {
    use super::point_segment_projection;
    use crate::math::Point;

    #[test]
    fn projects_on_interior_and_endpoints() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(2.0, 0.0, 0.0);

        let mid = point_segment_projection(&Point::new(1.0, 1.0, 0.0), 2.0, &a, &b, 0.0, 0.0)
            .unwrap();
        assert_relative_eq!(mid.uv.x, 0.5);
        assert_relative_eq!(mid.distance, 1.0);

        let past = point_segment_projection(&Point::new(3.0, 0.0, 0.0), 2.0, &a, &b, 0.0, 0.0)
            .unwrap();
        assert_relative_eq!(past.uv.x, 1.0);
        assert_relative_eq!(past.distance, 1.0);
    }
}
