//! Bounds of the indexed primitive kinds.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// Computes the [`Aabb`] of a point with a per-vertex radius.
#[inline]
pub fn point_aabb(pt: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(*pt, *pt).loosened(radius)
}

/// Computes the [`Aabb`] of a segment with per-vertex radii.
#[inline]
pub fn segment_aabb(a: &Point<Real>, b: &Point<Real>, radius_a: Real, radius_b: Real) -> Aabb {
    let ra = Vector::repeat(radius_a);
    let rb = Vector::repeat(radius_b);
    Aabb::new((a - ra).inf(&(b - rb)), (a + ra).sup(&(b + rb)))
}

/// Computes the [`Aabb`] of a triangle.
///
/// Per-vertex radii only matter for point-projection queries on triangles and
/// do not enlarge the bounds.
#[inline]
pub fn triangle_aabb(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Aabb {
    Aabb::from_points([a, b, c])
}

/// Computes the [`Aabb`] of a quad.
#[inline]
pub fn quad_aabb(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> Aabb {
    Aabb::from_points([a, b, c, d])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point;

    #[test]
    fn point_aabb_is_radius_cube() {
        let aabb = point_aabb(&Point::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(aabb.mins, Point::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.maxs, Point::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn segment_aabb_uses_both_radii() {
        let aabb = segment_aabb(
            &Point::new(0.0, 0.0, 0.0),
            &Point::new(2.0, 0.0, 0.0),
            0.1,
            0.3,
        );
        assert_eq!(aabb.mins, Point::new(-0.1, -0.3, -0.3));
        assert_eq!(aabb.maxs, Point::new(2.3, 0.3, 0.3));
    }

    #[test]
    fn triangle_aabb_ignores_winding() {
        let a = Point::new(0.0, 0.0, 0.0);
        let b = Point::new(1.0, 0.0, 0.0);
        let c = Point::new(0.0, 1.0, 0.0);
        assert_eq!(triangle_aabb(&a, &b, &c), triangle_aabb(&c, &b, &a));
    }
}
