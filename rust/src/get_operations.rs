//! GET operations for RedBlackTree.
//!
//! Read-only descents driven by the comparator: exact lookup, extremes, and
//! floor / ceiling queries.

use std::cmp::Ordering;

use crate::arena::{NodeId, NULL_NODE};
use crate::comparator::Comparator;
use crate::error::{KeyResult, RedBlackTreeError};
use crate::types::RedBlackTree;

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::default();
    /// tree.put(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.arena.get(self.lookup(key)).map(|node| &node.value)
    }

    /// Get a mutable reference to the value for a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.lookup(key);
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup(key) != NULL_NODE
    }

    /// Get value for a key, returning an error if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{RedBlackTree, RedBlackTreeError};
    ///
    /// let mut tree = RedBlackTree::default();
    /// tree.put(1, "one");
    /// assert_eq!(tree.get_item(&1), Ok(&"one"));
    /// assert_eq!(tree.get_item(&2), Err(RedBlackTreeError::KeyNotFound));
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(RedBlackTreeError::KeyNotFound)
    }

    /// Handle of the node holding `key`.
    pub fn get_node(&self, key: &K) -> Option<NodeId> {
        let id = self.lookup(key);
        (id != NULL_NODE).then_some(id)
    }

    /// Handle of the minimum node, `None` when empty.
    pub fn left(&self) -> Option<NodeId> {
        let id = self.min_from(self.root);
        (id != NULL_NODE).then_some(id)
    }

    /// Handle of the maximum node, `None` when empty.
    pub fn right(&self) -> Option<NodeId> {
        let id = self.max_from(self.root);
        (id != NULL_NODE).then_some(id)
    }

    /// Smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entry_at(self.min_from(self.root))
    }

    /// Largest entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entry_at(self.max_from(self.root))
    }

    /// Largest entry whose key is less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_, _> = [(10, 'a'), (20, 'b')].into_iter().collect();
    /// assert_eq!(tree.floor(&15), Some((&10, &'a')));
    /// assert_eq!(tree.floor(&20), Some((&20, &'b')));
    /// assert_eq!(tree.floor(&5), None);
    /// ```
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        self.floor_node(key).and_then(|id| self.entry_at(id))
    }

    /// Smallest entry whose key is greater than or equal to `key`.
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        self.ceiling_node(key).and_then(|id| self.entry_at(id))
    }

    /// Handle of the floor node of `key`.
    pub fn floor_node(&self, key: &K) -> Option<NodeId> {
        let mut floor = None;
        let mut current = self.root;
        while current != NULL_NODE {
            match self.comparator.compare(key, &self.arena[current].key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = self.left_of(current),
                Ordering::Greater => {
                    floor = Some(current);
                    current = self.right_of(current);
                }
            }
        }
        floor
    }

    /// Handle of the ceiling node of `key`.
    pub fn ceiling_node(&self, key: &K) -> Option<NodeId> {
        let mut ceiling = None;
        let mut current = self.root;
        while current != NULL_NODE {
            match self.comparator.compare(key, &self.arena[current].key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => {
                    ceiling = Some(current);
                    current = self.left_of(current);
                }
                Ordering::Greater => current = self.right_of(current),
            }
        }
        ceiling
    }

    // ============================================================================
    // HELPERS
    // ============================================================================

    /// Node holding `key`, or `NULL_NODE`.
    pub(crate) fn lookup(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NULL_NODE {
            match self.comparator.compare(key, &self.arena[current].key) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.left_of(current),
                Ordering::Greater => current = self.right_of(current),
            }
        }
        NULL_NODE
    }

    fn entry_at(&self, id: NodeId) -> Option<(&K, &V)> {
        self.arena.get(id).map(|node| (&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use crate::RedBlackTree;

    fn tree_of(keys: &[i32]) -> RedBlackTree<i32, String> {
        let mut tree = RedBlackTree::default();
        for &key in keys {
            tree.put(key, format!("v{}", key));
        }
        tree
    }

    #[test]
    fn test_left_right_floor_ceiling() {
        let tree = tree_of(&[3, 1, 2]);

        let left = tree.left().and_then(|id| tree.node(id)).map(|n| *n.key());
        let right = tree.right().and_then(|id| tree.node(id)).map(|n| *n.key());
        assert_eq!(left, Some(1));
        assert_eq!(right, Some(3));

        assert_eq!(tree.floor(&2).map(|(k, _)| *k), Some(2));
        assert_eq!(tree.ceiling(&2).map(|(k, _)| *k), Some(2));
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.ceiling(&4), None);
    }

    #[test]
    fn test_floor_ceiling_between_keys() {
        let tree = tree_of(&[10, 20, 30, 40]);
        assert_eq!(tree.floor(&25).map(|(k, _)| *k), Some(20));
        assert_eq!(tree.ceiling(&25).map(|(k, _)| *k), Some(30));
        assert_eq!(tree.floor(&100).map(|(k, _)| *k), Some(40));
        assert_eq!(tree.ceiling(&-5).map(|(k, _)| *k), Some(10));
    }

    #[test]
    fn test_empty_tree_queries() {
        let tree = tree_of(&[]);
        assert_eq!(tree.left(), None);
        assert_eq!(tree.right(), None);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.floor(&1), None);
        assert_eq!(tree.ceiling(&1), None);
        assert_eq!(tree.get(&1), None);
    }

    #[test]
    fn test_get_mut_and_contains() {
        let mut tree = tree_of(&[1, 2, 3]);
        if let Some(value) = tree.get_mut(&2) {
            value.push('!');
        }
        assert_eq!(tree.get(&2).map(String::as_str), Some("v2!"));
        assert!(tree.contains_key(&3));
        assert!(!tree.contains_key(&4));
        assert!(tree.get_item(&4).is_err());
        assert_eq!(tree.first().map(|(k, _)| *k), Some(1));
        assert_eq!(tree.last().map(|(k, _)| *k), Some(3));
    }

    #[test]
    fn test_get_node_handle() {
        let tree = tree_of(&[5, 3, 8]);
        let id = tree.get_node(&8).unwrap();
        assert_eq!(tree.node(id).map(|n| n.value().as_str()), Some("v8"));
        assert_eq!(tree.get_node(&9), None);
    }
}
