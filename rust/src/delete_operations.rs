//! DELETE operations for RedBlackTree.
//!
//! A node with two children is never unlinked directly: it trades key and
//! value with its in-order predecessor (the maximum of its left subtree),
//! and the predecessor's slot, which has at most one child, is removed
//! instead.

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::{ModifyResult, RedBlackTreeError};
use crate::types::{Color, RedBlackTree};

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Remove a key from the tree. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::default();
    /// tree.put(1, "one");
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Remove a key from the tree, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let mut node = self.lookup(key);
        if node == NULL_NODE {
            return None;
        }

        let left = self.left_of(node);
        if left != NULL_NODE && self.right_of(node) != NULL_NODE {
            let pred = self.max_from(left);
            let (target, donor) = self.arena.get2_mut(node, pred);
            target.swap_entry(donor);
            node = pred;
        }

        let child = if self.right_of(node) == NULL_NODE {
            self.left_of(node)
        } else {
            self.right_of(node)
        };
        if self.color_of(node) == Color::Black {
            let inherited = self.color_of(child);
            self.set_color(node, inherited);
            self.delete_fixup(node);
        }
        self.replace_node(node, child);
        if self.parent_of(node) == NULL_NODE && child != NULL_NODE {
            self.set_color(child, Color::Black);
        }

        self.len -= 1;
        log::trace!("freed node {}", node);
        self.arena.deallocate(node).map(|removed| removed.into_entry())
    }

    /// Remove with error reporting: a missing key is `KeyNotFound`, and the
    /// tree is validated before and after the mutation.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.validate_for_operation("remove")?;
        let (_, value) = self.remove_entry(key).ok_or(RedBlackTreeError::KeyNotFound)?;
        self.validate_for_operation("remove")?;
        Ok(value)
    }

    /// Restore black-height before the black node `node` is spliced out.
    ///
    /// The path through `node` is one black short once it is gone; each pass
    /// either repairs that locally or pushes the deficit up to the parent.
    fn delete_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = self.parent_of(node);
            if parent == NULL_NODE {
                return;
            }

            let mut sibling = self.sibling_of(node);
            if self.color_of(sibling) == Color::Red {
                log::trace!("delete fixup: red sibling {} rotated above {}", sibling, parent);
                self.set_color(parent, Color::Red);
                self.set_color(sibling, Color::Black);
                if node == self.left_of(parent) {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }
                sibling = self.sibling_of(node);
            }

            let nephews_black = self.color_of(self.left_of(sibling)) == Color::Black
                && self.color_of(self.right_of(sibling)) == Color::Black;

            if self.color_of(parent) == Color::Black
                && self.color_of(sibling) == Color::Black
                && nephews_black
            {
                self.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if self.color_of(parent) == Color::Red
                && self.color_of(sibling) == Color::Black
                && nephews_black
            {
                self.set_color(sibling, Color::Red);
                self.set_color(parent, Color::Black);
                return;
            }

            break;
        }

        // Sibling is black with at least one red child. Make sure the red one
        // sits on the far side from `node`.
        let parent = self.parent_of(node);
        let sibling = self.sibling_of(node);
        let node_is_left = node == self.left_of(parent);
        let near = if node_is_left {
            self.left_of(sibling)
        } else {
            self.right_of(sibling)
        };
        let far = if node_is_left {
            self.right_of(sibling)
        } else {
            self.left_of(sibling)
        };
        if self.color_of(sibling) == Color::Black
            && self.color_of(near) == Color::Red
            && self.color_of(far) == Color::Black
        {
            self.set_color(sibling, Color::Red);
            self.set_color(near, Color::Black);
            if node_is_left {
                self.rotate_right(sibling);
            } else {
                self.rotate_left(sibling);
            }
        }

        let sibling = self.sibling_of(node);
        log::trace!("delete fixup: final rotation at {}", parent);
        let parent_color = self.color_of(parent);
        self.set_color(sibling, parent_color);
        self.set_color(parent, Color::Black);
        // The far nephew is red here: either it already was, or the near-side
        // rotation above just put the old sibling there.
        if node_is_left {
            let far = self.right_of(sibling);
            self.set_color(far, Color::Black);
            self.rotate_left(parent);
        } else {
            let far = self.left_of(sibling);
            self.set_color(far, Color::Black);
            self.rotate_right(parent);
        }
    }
}
