//! INSERT operations for RedBlackTree.
//!
//! Descent to the attachment point, in-place overwrite of existing keys, and
//! the insertion fixup ladder that restores the color rules.

use std::cmp::Ordering;

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::ModifyResult;
use crate::types::{Color, Node, RedBlackTree};

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Insert a key-value pair into the tree.
    ///
    /// If the key already exists its value is replaced in place and the old
    /// value is returned; the shape of the tree does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::default();
    /// assert_eq!(tree.put(1, "one"), None);
    /// assert_eq!(tree.put(1, "ONE"), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.root == NULL_NODE {
            let id = self.arena.allocate(Node::new(key, value, NULL_NODE));
            log::trace!("allocated root node {}", id);
            self.root = id;
            self.len += 1;
            self.insert_fixup(id);
            return None;
        }

        let mut current = self.root;
        let attach_left = loop {
            let ordering = self.comparator.compare(&key, &self.arena[current].key);
            let next = match ordering {
                Ordering::Equal => {
                    return Some(self.arena[current].replace_value(value));
                }
                Ordering::Less => self.left_of(current),
                Ordering::Greater => self.right_of(current),
            };
            if next == NULL_NODE {
                break ordering == Ordering::Less;
            }
            current = next;
        };

        let parent = current;
        let id = self.arena.allocate(Node::new(key, value, parent));
        if attach_left {
            self.arena[parent].left = id;
        } else {
            self.arena[parent].right = id;
        }
        log::trace!("attached node {} under {}", id, parent);

        self.len += 1;
        self.insert_fixup(id);
        None
    }

    /// Insert after validating the tree before and after the mutation.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<Option<V>> {
        self.validate_for_operation("insert")?;
        let old_value = self.put(key, value);
        self.validate_for_operation("insert")?;
        Ok(old_value)
    }

    /// Restore the color rules after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = self.parent_of(node);
            if parent == NULL_NODE {
                // Root.
                self.set_color(node, Color::Black);
                return;
            }
            if self.color_of(parent) == Color::Black {
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.parent_of(parent);
            let uncle = self.sibling_of(parent);
            if self.color_of(uncle) != Color::Red {
                break;
            }
            log::trace!("insert fixup: recolor at {} and climb", grandparent);
            self.set_color(parent, Color::Black);
            self.set_color(uncle, Color::Black);
            self.set_color(grandparent, Color::Red);
            node = grandparent;
        }

        // Uncle is black. Turn an inner grandchild into an outer one first.
        let parent = self.parent_of(node);
        let grandparent = self.parent_of(parent);
        if node == self.right_of(parent) && parent == self.left_of(grandparent) {
            self.rotate_left(parent);
            node = self.left_of(node);
        } else if node == self.left_of(parent) && parent == self.right_of(grandparent) {
            self.rotate_right(parent);
            node = self.right_of(node);
        }

        let parent = self.parent_of(node);
        let grandparent = self.parent_of(parent);
        log::trace!("insert fixup: rotate at {}", grandparent);
        self.set_color(parent, Color::Black);
        self.set_color(grandparent, Color::Red);
        if node == self.left_of(parent) {
            self.rotate_right(grandparent);
        } else {
            self.rotate_left(grandparent);
        }
    }
}
