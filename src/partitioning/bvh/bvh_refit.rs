use super::bvh_tree::Bvh;
use crate::bounding_volume::Aabb;

impl Bvh {
    /// Recomputes every node's bounds from the refreshed primitive bounds
    /// `aabbs`, without altering the tree topology.
    ///
    /// This is the cheap alternative to [`Bvh::from_leaves`] when only the
    /// vertex positions changed: the per-leaf primitive assignment stays
    /// exactly as built, only the boxes move. `aabbs` must describe the same
    /// primitives the tree was built over, in the same order.
    ///
    /// Nodes are visited from the last index down to the root; children are
    /// always appended after their parent at build time, so every child is
    /// up to date when its parent is recomputed.
    pub fn refit(&mut self, aabbs: &[Aabb]) {
        for node_id in (0..self.nodes.len()).rev() {
            let node = self.nodes[node_id];
            let mut aabb = Aabb::new_invalid();

            if node.internal {
                for child in node.start..node.start + node.num as u32 {
                    aabb.merge(&self.nodes[child as usize].aabb);
                }
            } else {
                let range = node.start as usize..node.start as usize + node.num as usize;
                for prim in &self.primitives[range] {
                    aabb.merge(&aabbs[*prim as usize]);
                }
            }

            self.nodes[node_id].aabb = aabb;
        }
    }
}
