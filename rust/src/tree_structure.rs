//! Tree structure management operations for RedBlackTree.
//!
//! Link navigation, rotations, in-order neighbours, size queries and
//! clearing. Nothing here consults the comparator.

use crate::arena::{NodeId, NULL_NODE};
use crate::types::{Color, Node, RedBlackTree};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clear all items from the tree.
    pub fn clear(&mut self) {
        log::debug!("clearing red-black tree with {} entries", self.len);
        self.arena.clear();
        self.root = NULL_NODE;
        self.len = 0;
    }

    /// Handle of the root node, `None` when empty.
    pub fn root(&self) -> Option<NodeId> {
        (self.root != NULL_NODE).then_some(self.root)
    }

    /// Borrow the node behind a handle, if it is still live.
    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.arena.get(id)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.height_from(self.root)
    }

    fn height_from(&self, id: NodeId) -> usize {
        match self.arena.get(id) {
            Some(node) => 1 + self.height_from(node.left).max(self.height_from(node.right)),
            None => 0,
        }
    }

    /// Black nodes on the leftmost root-to-null path, root included.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;
        while current != NULL_NODE {
            if self.arena[current].color == Color::Black {
                count += 1;
            }
            current = self.arena[current].left;
        }
        count
    }

    // ============================================================================
    // LINK NAVIGATION
    // ============================================================================

    /// Absent links count as black.
    #[inline]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.arena.get(id).map_or(Color::Black, |node| node.color)
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena[id].color = color;
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.arena[id].parent
    }

    #[inline]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.arena[id].left
    }

    #[inline]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.arena[id].right
    }

    /// The other child of `id`'s parent. `id` must not be the root.
    pub(crate) fn sibling_of(&self, id: NodeId) -> NodeId {
        let parent = self.parent_of(id);
        if self.left_of(parent) == id {
            self.right_of(parent)
        } else {
            self.left_of(parent)
        }
    }

    /// Leftmost node of the subtree at `id`.
    pub(crate) fn min_from(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.left_of(id) != NULL_NODE {
            id = self.left_of(id);
        }
        id
    }

    /// Rightmost node of the subtree at `id`.
    pub(crate) fn max_from(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.right_of(id) != NULL_NODE {
            id = self.right_of(id);
        }
        id
    }

    /// In-order successor, or `NULL_NODE` past the maximum.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        if self.right_of(id) != NULL_NODE {
            return self.min_from(self.right_of(id));
        }
        let mut child = id;
        let mut parent = self.parent_of(id);
        while parent != NULL_NODE && self.right_of(parent) == child {
            child = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    /// In-order predecessor, or `NULL_NODE` before the minimum.
    pub(crate) fn predecessor(&self, id: NodeId) -> NodeId {
        if self.left_of(id) != NULL_NODE {
            return self.max_from(self.left_of(id));
        }
        let mut child = id;
        let mut parent = self.parent_of(id);
        while parent != NULL_NODE && self.left_of(parent) == child {
            child = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    // ============================================================================
    // STRUCTURAL SURGERY
    // ============================================================================

    /// Put `new` (possibly `NULL_NODE`) into the parent slot `old` occupies.
    /// `old` keeps its own stale parent link.
    pub(crate) fn replace_node(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent_of(old);
        if parent == NULL_NODE {
            self.root = new;
        } else if self.left_of(parent) == old {
            self.arena[parent].left = new;
        } else {
            self.arena[parent].right = new;
        }
        if new != NULL_NODE {
            self.arena[new].parent = parent;
        }
    }

    rotation!(left, right, left);
    rotation!(right, left, right);
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;

    fn sample() -> RedBlackTree<i32, i32> {
        let mut tree = RedBlackTree::default();
        for key in [4, 2, 6, 1, 3, 5, 7] {
            tree.put(key, key * 10);
        }
        tree
    }

    #[test]
    fn test_successor_and_predecessor_walk() {
        let tree = sample();
        let mut forward = Vec::new();
        let mut id = tree.min_from(tree.root);
        while let Some(node) = tree.node(id) {
            forward.push(*node.key());
            id = tree.successor(id);
        }
        assert_eq!(forward, vec![1, 2, 3, 4, 5, 6, 7]);

        let mut backward = Vec::new();
        let mut id = tree.max_from(tree.root);
        while let Some(node) = tree.node(id) {
            backward.push(*node.key());
            id = tree.predecessor(id);
        }
        assert_eq!(backward, vec![7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_rotations_preserve_order() {
        let mut tree = sample();
        let root = tree.root;
        tree.rotate_left(root);
        assert_eq!(tree.keys(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.node(tree.root).map(|n| *n.key()), Some(6));
        assert_eq!(tree.node(root).and_then(|n| n.parent()), Some(tree.root));

        let new_root = tree.root;
        tree.rotate_right(new_root);
        assert_eq!(tree.node(tree.root).map(|n| *n.key()), Some(4));
        assert_eq!(tree.keys(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_height_bounds() {
        let mut tree: RedBlackTree<i32, ()> = RedBlackTree::default();
        for key in 0..1024 {
            tree.put(key, ());
        }
        // 2 * log2(1025) is just above 20.
        assert!(tree.height() <= 20, "height {}", tree.height());
        assert!(tree.black_height() >= 5);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut tree = sample();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.keys(), Vec::<i32>::new());
        tree.put(1, 1);
        assert_eq!(tree.len(), 1);
    }
}
