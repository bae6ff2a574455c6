use crate::math::{Point, Real, Vector2};
use crate::query::point::point_triangle_projection;
use crate::query::PrimitiveIntersection;

/// Projection of `pt` on the quad `(a, b, c, d)`, triangulated as `(a, b, d)`
/// and `(c, d, b)`.
///
/// A quad with `c == d` encodes a triangle and is tested as one; the second
/// triangle's parametric coordinates are flipped to `1 - uv`, matching the
/// ray test.
pub fn point_quad_projection(
    pt: &Point<Real>,
    max_distance: Real,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    radius_a: Real,
    radius_b: Real,
    radius_c: Real,
    radius_d: Real,
) -> Option<PrimitiveIntersection> {
    if c == d {
        return point_triangle_projection(pt, max_distance, a, b, d, radius_a, radius_b, radius_c);
    }

    let hit1 = point_triangle_projection(pt, max_distance, a, b, d, radius_a, radius_b, radius_d);
    let hit2 = point_triangle_projection(pt, max_distance, c, d, b, radius_c, radius_d, radius_b)
        .map(|hit| PrimitiveIntersection::new(Vector2::repeat(1.0) - hit.uv, hit.distance));

    match (hit1, hit2) {
        (Some(h1), Some(h2)) => Some(if h1.distance <= h2.distance { h1 } else { h2 }),
        (h1, h2) => h1.or(h2),
    }
}

#[cfg(test)]
mod test {
    use super::point_quad_projection;
    use crate::math::Point;

    #[test]
    fn closest_half_wins() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(1.0, 1.0, 0.0);
        let d = Point::new(0.0, 1.0, 0.0);

        let hit =
            point_quad_projection(&Point::new(0.9, 0.9, 0.5), 1.0, &a, &b, &c, &d, 0.0, 0.0, 0.0, 0.0)
                .unwrap();
        assert_relative_eq!(hit.distance, 0.5, epsilon = 1.0e-6);
    }
}
