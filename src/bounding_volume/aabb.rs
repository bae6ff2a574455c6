//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners; its edges are always
/// parallel to the coordinate axes, making intersection and inclusion tests
/// very cheap. It is the bounding volume stored on every node of a
/// [`Bvh`](crate::partitioning::Bvh).
///
/// Invariant: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, `mins.z ≤ maxs.z` — except
/// for the deliberately inverted result of [`Aabb::new_invalid`], which acts
/// as the identity element for [`Aabb::merge`].
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any point or AABB into this yields that point or AABB, so this
    /// is the natural accumulator seed for bound computations.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(*pt);
        }
        result
    }

    /// The center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents (full dimensions) of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// Merges this AABB with another one, in place.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Enlarges this AABB by `amount` on every side, in place.
    #[inline]
    pub fn loosen(&mut self, amount: Real) {
        self.mins -= Vector::repeat(amount);
        self.maxs += Vector::repeat(amount);
    }

    /// A new AABB enlarged by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        Aabb {
            mins: self.mins - Vector::repeat(amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Checks whether `pt` lies inside this AABB (boundary included).
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        for i in 0..DIM {
            if pt[i] < self.mins[i] || pt[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Checks whether this AABB intersects `other` (boundary contact counts).
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.mins[i] > other.maxs[i] || self.maxs[i] < other.mins[i] {
                return false;
            }
        }

        true
    }
}
