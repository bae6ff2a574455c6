use super::bvh_build::LEAF_MAX_PRIMITIVES;
use super::bvh_tree::Bvh;
use crate::bounding_volume::Aabb;

impl Bvh {
    /// Panics unless this tree is well-formed with respect to `aabbs`, the
    /// bounds it was built from (or last refitted with):
    ///
    /// - the primitive permutation is a bijection on `0..aabbs.len()`;
    /// - every leaf references at most [`LEAF_MAX_PRIMITIVES`] primitives and
    ///   the leaf ranges cover the permutation exactly once;
    /// - every node's bounds equal the exact union of the bounds of the
    ///   primitives below it (`min`/`max` folds are exact, so equality is
    ///   bitwise).
    ///
    /// Intended for tests and debugging; it visits the whole tree.
    pub fn assert_well_formed(&self, aabbs: &[Aabb]) {
        assert_eq!(
            self.primitives.len(),
            aabbs.len(),
            "permutation length differs from the primitive count"
        );
        if self.nodes.is_empty() {
            assert!(aabbs.is_empty(), "non-empty input produced an empty tree");
            return;
        }

        let mut seen = vec![false; aabbs.len()];
        for prim in &self.primitives {
            assert!(
                !seen[*prim as usize],
                "primitive {prim} appears twice in the permutation"
            );
            seen[*prim as usize] = true;
        }

        let mut covered = vec![false; self.primitives.len()];
        let root_union = self.subtree_union(0, aabbs, &mut covered);
        assert_eq!(self.nodes[0].aabb, root_union);
        assert!(
            covered.iter().all(|c| *c),
            "some permutation slots are not referenced by any leaf"
        );
    }

    fn subtree_union(&self, node_id: u32, aabbs: &[Aabb], covered: &mut [bool]) -> Aabb {
        let node = self.nodes[node_id as usize];
        let mut union = Aabb::new_invalid();

        if node.internal {
            assert_eq!(node.num, 2, "internal node without exactly two children");
            assert!(node.axis < 3, "invalid split axis");
            union.merge(&self.subtree_union(node.start, aabbs, covered));
            union.merge(&self.subtree_union(node.start + 1, aabbs, covered));
        } else {
            assert!(
                node.num as usize <= LEAF_MAX_PRIMITIVES,
                "leaf over the primitive cap"
            );
            for slot in node.start as usize..node.start as usize + node.num as usize {
                assert!(!covered[slot], "permutation slot {slot} in two leaves");
                covered[slot] = true;
                union.merge(&aabbs[self.primitives[slot] as usize]);
            }
        }

        assert_eq!(
            node.aabb, union,
            "node {node_id} bounds differ from its subtree union"
        );
        union
    }
}
