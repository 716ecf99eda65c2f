//! Validation and debugging utilities for RedBlackTree.
//!
//! Full-tree invariant checks used by the checked mutation entry points and
//! by the test suites.

use std::cmp::Ordering;

use crate::arena::{ArenaStats, NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::{RedBlackTreeError, TreeResult, TreeResultExt};
use crate::types::{Color, RedBlackTree};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Check if the tree maintains all red-black invariants.
    pub fn check_invariants(&self) -> bool {
        match self.check_invariants_detailed() {
            Ok(()) => true,
            Err(e) => {
                log::debug!("invariant check failed: {}", e);
                false
            }
        }
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies, in order: the root is black and parentless; every subtree
    /// respects comparator order; parent links mirror child links; no red
    /// node has a red child; black-height agrees on every path; the node
    /// count matches `len()` and the arena's live slot count.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if self.root != NULL_NODE {
            let root = self.arena.get(self.root).ok_or_else(|| {
                RedBlackTreeError::arena_error("Root lookup", "root handle is not allocated")
            })?;
            if root.color != Color::Black {
                return Err(RedBlackTreeError::corrupted_tree("Color", "root is red"));
            }
        }

        let mut count = 0;
        self.check_subtree(self.root, NULL_NODE, None, None, &mut count)?;

        if count != self.len {
            return Err(RedBlackTreeError::data_integrity(
                "Size",
                &format!("{} reachable nodes but len() is {}", count, self.len),
            ));
        }

        let allocated = self.arena.allocated_count();
        if allocated != count {
            return Err(RedBlackTreeError::arena_error(
                "Arena consistency check",
                &format!("{} in tree vs {} in arena", count, allocated),
            ));
        }

        Ok(())
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> TreeResult<()> {
        self.check_invariants_detailed().with_operation(operation)
    }

    /// Returns the black-height of the subtree at `id` (absent children
    /// count as one black leaf).
    fn check_subtree(
        &self,
        id: NodeId,
        expected_parent: NodeId,
        lower: Option<NodeId>,
        upper: Option<NodeId>,
        count: &mut usize,
    ) -> TreeResult<usize> {
        if id == NULL_NODE {
            return Ok(1);
        }

        let node = self.arena.get(id).ok_or_else(|| {
            RedBlackTreeError::arena_error("Node lookup", &format!("node {} is not allocated", id))
        })?;
        *count += 1;

        if node.parent != expected_parent {
            return Err(RedBlackTreeError::corrupted_tree(
                "Parent link",
                &format!(
                    "node {} points at parent {} but hangs under {}",
                    id, node.parent, expected_parent
                ),
            ));
        }

        if let Some(bound) = lower {
            if self.comparator.compare(&node.key, &self.arena[bound].key) != Ordering::Greater {
                return Err(RedBlackTreeError::corrupted_tree(
                    "Ordering",
                    &format!("node {} is not greater than ancestor {}", id, bound),
                ));
            }
        }
        if let Some(bound) = upper {
            if self.comparator.compare(&node.key, &self.arena[bound].key) != Ordering::Less {
                return Err(RedBlackTreeError::corrupted_tree(
                    "Ordering",
                    &format!("node {} is not less than ancestor {}", id, bound),
                ));
            }
        }

        if node.color == Color::Red
            && (self.color_of(node.left) == Color::Red || self.color_of(node.right) == Color::Red)
        {
            return Err(RedBlackTreeError::corrupted_tree(
                "Color",
                &format!("red node {} has a red child", id),
            ));
        }

        let left_height = self.check_subtree(node.left, id, lower, Some(id), count)?;
        let right_height = self.check_subtree(node.right, id, Some(id), upper, count)?;
        if left_height != right_height {
            return Err(RedBlackTreeError::corrupted_tree(
                "Black height",
                &format!(
                    "node {} has black-height {} on the left and {} on the right",
                    id, left_height, right_height
                ),
            ));
        }

        Ok(left_height + usize::from(node.color == Color::Black))
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}
