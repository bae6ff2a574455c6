use crate::math::{Real, Vector2};

/// The result of a ray or point-projection test against a single primitive.
///
/// The meaning of `uv` depends on the primitive kind: barycentric coordinates
/// for triangles and quads, the curve parameter and normalized radial offset
/// for segments, and zero for points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrimitiveIntersection {
    /// Parametric coordinates of the hit within the primitive.
    pub uv: Vector2<Real>,
    /// Ray parameter of the hit, or distance from the query point.
    pub distance: Real,
}

impl PrimitiveIntersection {
    /// Creates a new `PrimitiveIntersection`.
    #[inline]
    pub fn new(uv: Vector2<Real>, distance: Real) -> Self {
        Self { uv, distance }
    }
}

/// The result of a ray-cast or point-projection query against a whole
/// primitive set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Index of the intersected primitive in the caller's element array.
    pub primitive: u32,
    /// Parametric coordinates of the hit within that primitive.
    pub uv: Vector2<Real>,
    /// Ray parameter of the hit, or distance from the query point.
    pub distance: Real,
}

impl Intersection {
    #[inline]
    pub(crate) fn from_primitive(primitive: u32, hit: PrimitiveIntersection) -> Self {
        Self {
            primitive,
            uv: hit.uv,
            distance: hit.distance,
        }
    }
}
