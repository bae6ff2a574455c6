//! Structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// The ray covers the parameter interval `[tmin, tmax]`: points
/// `origin + dir * t` with `t` inside the interval. The direction does not
/// need to be normalized; with a normalized direction the parameter is the
/// travelled distance.
///
/// Queries treat `tmax` as mutable state: the BVH traversal shrinks its local
/// copy of the ray as closer hits are found, which is what lets it prune
/// whole subtrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray. Does not need to be normalized.
    pub dir: Vector<Real>,
    /// Smallest admissible ray parameter.
    pub tmin: Real,
    /// Largest admissible ray parameter.
    pub tmax: Real,
}

impl Ray {
    /// Default value of [`Ray::tmin`], keeping hits at the ray origin itself
    /// (e.g. a surface re-casting from its own hit point) out of the result.
    pub const DEFAULT_TMIN: Real = 1.0e-4;

    /// Creates a new ray covering `[Self::DEFAULT_TMIN, Real::MAX]`.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray {
            origin,
            dir,
            tmin: Self::DEFAULT_TMIN,
            tmax: Real::MAX,
        }
    }

    /// Creates a new ray with an explicit parameter interval.
    #[inline]
    pub fn with_range(origin: Point<Real>, dir: Vector<Real>, tmin: Real, tmax: Real) -> Ray {
        Ray {
            origin,
            dir,
            tmin,
            tmax,
        }
    }

    /// Computes the point along the ray at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
