use super::bvh_tree::Bvh;
use crate::math::{Point, Real};
use crate::query::{Intersection, Ray};
use crate::shape::PrimitiveSet;
use arrayvec::ArrayVec;

// Traversal stack capacities. A median-split tree over n primitives with up
// to 4 per leaf is O(log n) deep in the regular case and n/4 deep in the
// pathological all-structural-splits case; 128 entries cover both far beyond
// any realistic input. `ArrayVec::push` panics on overflow, turning a
// blown stack into a loud assertion instead of silent corruption.
const RAY_STACK_CAPACITY: usize = 128;
const PROJECTION_STACK_CAPACITY: usize = 64;

impl Bvh {
    /// Casts `ray` against every primitive of `set` indexed by this tree.
    ///
    /// Returns the closest intersection within `[ray.tmin, ray.tmax]`, or,
    /// when `find_any` is set, the first intersection encountered (not
    /// necessarily the closest) so callers that only need a yes/no answer
    /// (occlusion, shadow rays) can stop early.
    ///
    /// The traversal keeps a local copy of the ray and shrinks its `tmax` to
    /// each accepted hit, which lets the box test prune every subtree that
    /// lies behind the best hit so far. Children of an internal node are
    /// visited front-to-back along the node's split axis.
    pub fn cast_ray<S: PrimitiveSet>(
        &self,
        set: &S,
        ray: &Ray,
        find_any: bool,
    ) -> Option<Intersection> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut stack: ArrayVec<u32, RAY_STACK_CAPACITY> = ArrayVec::new();
        stack.push(0);

        let mut ray = *ray;
        let dir_inv = ray.dir.map(|x| 1.0 / x);
        let dir_neg = [dir_inv.x < 0.0, dir_inv.y < 0.0, dir_inv.z < 0.0];

        let mut best = None;

        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id as usize];
            if !node.aabb.intersects_local_ray(&ray, &dir_inv) {
                continue;
            }

            if node.internal {
                // Push the far child first so the near one is popped first.
                if dir_neg[node.axis as usize] {
                    stack.push(node.start);
                    stack.push(node.start + 1);
                } else {
                    stack.push(node.start + 1);
                    stack.push(node.start);
                }
            } else {
                let range = node.start as usize..node.start as usize + node.num as usize;
                for prim in &self.primitives[range] {
                    if let Some(hit) = set.cast_local_ray(*prim, &ray) {
                        ray.tmax = hit.distance;
                        best = Some(Intersection::from_primitive(*prim, hit));
                    }
                }
            }

            if find_any && best.is_some() {
                return best;
            }
        }

        best
    }

    /// Finds the primitive of `set` closest to `pt` within `max_distance`.
    ///
    /// Returns the nearest projection, or, when `find_any` is set, the first
    /// one encountered. `max_distance` shrinks to each accepted hit exactly
    /// like the ray query's `tmax`, pruning nodes farther than the best
    /// candidate so far.
    pub fn project_point<S: PrimitiveSet>(
        &self,
        set: &S,
        pt: &Point<Real>,
        max_distance: Real,
        find_any: bool,
    ) -> Option<Intersection> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut stack: ArrayVec<u32, PROJECTION_STACK_CAPACITY> = ArrayVec::new();
        stack.push(0);

        let mut max_distance = max_distance;
        let mut best = None;

        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id as usize];
            if !node.aabb.intersects_local_point(pt, max_distance) {
                continue;
            }

            if node.internal {
                stack.push(node.start);
                stack.push(node.start + 1);
            } else {
                let range = node.start as usize..node.start as usize + node.num as usize;
                for prim in &self.primitives[range] {
                    if let Some(hit) = set.project_local_point(*prim, pt, max_distance) {
                        max_distance = hit.distance;
                        best = Some(Intersection::from_primitive(*prim, hit));
                    }
                }
            }

            if find_any && best.is_some() {
                return best;
            }
        }

        best
    }
}
