use crate::math::{Point, Real, Vector2};
use crate::query::PrimitiveIntersection;

/// Projection of `pt` on a point with a per-vertex radius, accepted when the
/// center lies within `max_distance + radius` of `pt`.
pub fn point_point_projection(
    pt: &Point<Real>,
    max_distance: Real,
    center: &Point<Real>,
    radius: Real,
) -> Option<PrimitiveIntersection> {
    let d2 = (pt - center).norm_squared();
    let reach = max_distance + radius;
    if d2 > reach * reach {
        return None;
    }

    Some(PrimitiveIntersection::new(Vector2::zeros(), d2.sqrt()))
}
