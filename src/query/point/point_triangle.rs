use crate::math::{Point, Real, Vector2};
use crate::query::PrimitiveIntersection;

/// Barycentric coordinates (weights of `b` and `c`) of the point of triangle
/// `(a, b, c)` closest to `pt`.
///
/// Walks the Voronoi regions of the triangle: each vertex, each edge, then
/// the face interior.
pub(crate) fn closest_triangle_uv(
    pt: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Vector2<Real> {
    let ab = b - a;
    let ac = c - a;

    let ap = pt - a;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return Vector2::new(0.0, 0.0);
    }

    let bp = pt - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return Vector2::new(1.0, 0.0);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return Vector2::new(d1 / (d1 - d3), 0.0);
    }

    let cp = pt - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return Vector2::new(0.0, 1.0);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return Vector2::new(0.0, d2 / (d2 - d6));
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return Vector2::new(1.0 - w, w);
    }

    let denom = 1.0 / (va + vb + vc);
    Vector2::new(vb * denom, vc * denom)
}

/// Projection of `pt` on a triangle with per-vertex radii, accepted when the
/// closest point lies within `max_distance + radius` of `pt` with the radius
/// interpolated barycentrically.
pub fn point_triangle_projection(
    pt: &Point<Real>,
    max_distance: Real,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    radius_a: Real,
    radius_b: Real,
    radius_c: Real,
) -> Option<PrimitiveIntersection> {
    let uv = closest_triangle_uv(pt, a, b, c);
    let wa = 1.0 - uv.x - uv.y;
    let on_triangle = Point::from(a.coords * wa + b.coords * uv.x + c.coords * uv.y);
    let radius = radius_a * wa + radius_b * uv.x + radius_c * uv.y;
    let d2 = (pt - on_triangle).norm_squared();
    let reach = max_distance + radius;
    if d2 > reach * reach {
        return None;
    }

    Some(PrimitiveIntersection::new(uv, d2.sqrt()))
}

#[cfg(test)]
mod test {
    use super::{closest_triangle_uv, point_triangle_projection};
    use crate::math::{Point, Vector2};

    #[test]
    fn face_vertex_and_edge_regions() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);

        // Above the interior: projects straight down on the face.
        let uv = closest_triangle_uv(&Point::new(0.25, 0.25, 1.0), &a, &b, &c);
        assert_relative_eq!(uv.x, 0.25, epsilon = 1.0e-6);
        assert_relative_eq!(uv.y, 0.25, epsilon = 1.0e-6);

        // Beyond vertex b.
        let uv = closest_triangle_uv(&Point::new(2.0, -1.0, 0.0), &a, &b, &c);
        assert_eq!(uv, Vector2::new(1.0, 0.0));

        // Off the ab edge.
        let uv = closest_triangle_uv(&Point::new(0.5, -1.0, 0.0), &a, &b, &c);
        assert_relative_eq!(uv.x, 0.5, epsilon = 1.0e-6);
        assert_eq!(uv.y, 0.0);
    }

    #[test]
    fn distance_includes_radius_reach() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);
        let pt = Point::new(0.25, 0.25, 1.0);

        assert!(point_triangle_projection(&pt, 0.5, &a, &b, &c, 0.0, 0.0, 0.0).is_none());
        let hit = point_triangle_projection(&pt, 0.5, &a, &b, &c, 0.6, 0.6, 0.6).unwrap();
        assert_relative_eq!(hit.distance, 1.0, epsilon = 1.0e-6);
    }
}
