use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

impl Aabb {
    /// Tests whether a ball of radius `max_distance` centered at `pt` can
    /// intersect this AABB.
    ///
    /// The box is expanded by `max_distance` and tested for containment, so
    /// the test is conservative near the corners; that is fine for its role
    /// as a traversal prune test.
    #[inline]
    pub fn intersects_local_point(&self, pt: &Point<Real>, max_distance: Real) -> bool {
        self.loosened(max_distance).contains_local_point(pt)
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::Aabb;
    use crate::math::Point;

    #[test]
    fn point_near_face_overlaps() {
        let aabb = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
        let pt = Point::new(1.4, 0.5, 0.5);
        assert!(aabb.intersects_local_point(&pt, 0.5));
        assert!(!aabb.intersects_local_point(&pt, 0.3));
    }
}
