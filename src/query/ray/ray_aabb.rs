use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector, DIM};
use crate::query::Ray;

// Multiplicative slop on the far slab so boxes that are flat on one axis
// still report an intersection when the ray grazes them within rounding.
const TMAX_SLOP: Real = 1.000_000_24;

impl Aabb {
    /// Tests whether `ray` intersects this AABB within `[ray.tmin, ray.tmax]`.
    ///
    /// `dir_inv` must be the componentwise inverse of `ray.dir`; callers that
    /// test many boxes against one ray (the BVH traversal) compute it once.
    #[inline]
    pub fn intersects_local_ray(&self, ray: &Ray, dir_inv: &Vector<Real>) -> bool {
        let mut t0 = ray.tmin;
        let mut t1 = ray.tmax;

        for i in 0..DIM {
            let near = (self.mins[i] - ray.origin[i]) * dir_inv[i];
            let far = (self.maxs[i] - ray.origin[i]) * dir_inv[i];
            t0 = t0.max(near.min(far));
            t1 = t1.min(near.max(far));
        }

        t0 <= t1 * TMAX_SLOP
    }
}
