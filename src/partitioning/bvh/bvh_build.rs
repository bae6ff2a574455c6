use super::bvh_tree::{Bvh, BvhNode};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use log::debug;

/// Maximum number of primitives referenced by a single leaf.
pub const LEAF_MAX_PRIMITIVES: usize = 4;

impl Bvh {
    /// Builds a tree over `aabbs`, one entry per primitive.
    ///
    /// Splitting is driven by the bound centers, not the bounds themselves:
    /// each range is partitioned around the midpoint of its centers' bounds
    /// on the largest axis, and ranges of at most [`LEAF_MAX_PRIMITIVES`]
    /// primitives become leaves. An empty `aabbs` yields an empty tree.
    pub fn from_leaves(aabbs: &[Aabb]) -> Self {
        let mut bvh = Bvh {
            nodes: Vec::with_capacity(aabbs.len() * 2),
            primitives: (0..aabbs.len() as u32).collect(),
        };
        if aabbs.is_empty() {
            return bvh;
        }

        let centers: Vec<Point<Real>> = aabbs.iter().map(|aabb| aabb.center()).collect();

        let mut worklist = vec![(0u32, 0usize, aabbs.len())];
        bvh.nodes.push(BvhNode::invalid());

        while let Some((node_id, start, end)) = worklist.pop() {
            // The range's permutation is final once it is split off from its
            // parent, so the bounds can be computed here.
            let mut aabb = Aabb::new_invalid();
            for prim in &bvh.primitives[start..end] {
                aabb.merge(&aabbs[*prim as usize]);
            }

            let node = if end - start > LEAF_MAX_PRIMITIVES {
                let (mid, axis) = split_middle(&mut bvh.primitives, &centers, start, end);
                let children = bvh.nodes.len() as u32;
                bvh.nodes.push(BvhNode::invalid());
                bvh.nodes.push(BvhNode::invalid());
                worklist.push((children, start, mid));
                worklist.push((children + 1, mid, end));
                BvhNode {
                    aabb,
                    start: children,
                    num: 2,
                    axis,
                    internal: true,
                }
            } else {
                BvhNode {
                    aabb,
                    start: start as u32,
                    num: (end - start) as u16,
                    axis: 0,
                    internal: false,
                }
            };

            bvh.nodes[node_id as usize] = node;
        }

        bvh
    }
}

/// Partitions `primitives[start..end]` around the midpoint of the centers'
/// bounds on the largest axis. Returns the split position and axis.
///
/// Falls back to a structural bisection at `(start + end) / 2` when all
/// centers coincide or the spatial partition leaves one side empty; this
/// guarantees both children are non-empty and the build terminates.
fn split_middle(
    primitives: &mut [u32],
    centers: &[Point<Real>],
    start: usize,
    end: usize,
) -> (usize, u8) {
    let mut cbbox = Aabb::new_invalid();
    for prim in &primitives[start..end] {
        cbbox.take_point(centers[*prim as usize]);
    }
    let csize = cbbox.extents();
    if csize == Vector::zeros() {
        return ((start + end) / 2, 0);
    }

    // Largest axis; x wins ties with y and z, y wins ties with z.
    let mut axis = 0;
    if csize[1] > csize[axis] {
        axis = 1;
    }
    if csize[2] > csize[axis] {
        axis = 2;
    }
    let split = cbbox.center()[axis];

    let mid = start
        + partition(&mut primitives[start..end], |prim| {
            centers[prim as usize][axis] < split
        });

    if mid == start || mid == end {
        // Many coincident centers on the split axis; separating them
        // spatially is impossible, so bisect the index range instead.
        debug!(
            "median split left one side empty over {} primitives, bisecting structurally",
            end - start
        );
        return ((start + end) / 2, axis as u8);
    }

    (mid, axis as u8)
}

/// In-place partition moving elements satisfying `pred` to the front while
/// preserving their relative order. Returns the number of such elements.
fn partition(slice: &mut [u32], mut pred: impl FnMut(u32) -> bool) -> usize {
    let mut first = 0;
    for i in 0..slice.len() {
        if pred(slice[i]) {
            slice.swap(first, i);
            first += 1;
        }
    }
    first
}
