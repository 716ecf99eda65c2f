//! Construction and initialization logic for RedBlackTree.
//!
//! The comparator is the tree's only configuration that affects behaviour;
//! arena pre-allocation is a tuning knob.

use crate::arena::{Arena, MAX_NODES, NULL_NODE};
use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{InitResult, RedBlackTreeError};
use crate::types::{RedBlackTree, DEFAULT_ARENA_CAPACITY};

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Create an empty tree ordered by `comparator`.
    ///
    /// `comparator` must be a strict total order over every key that will
    /// ever be inserted. Anything else leaves the tree shape unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// // Longest string first.
    /// let mut tree = RedBlackTree::new(|a: &&str, b: &&str| b.len().cmp(&a.len()));
    /// tree.put("ab", 2);
    /// tree.put("abcd", 4);
    /// tree.put("a", 1);
    /// assert_eq!(tree.keys(), vec!["abcd", "ab", "a"]);
    /// ```
    pub fn new(comparator: C) -> Self
    where
        C: Comparator<K>,
    {
        Self {
            root: NULL_NODE,
            len: 0,
            comparator,
            arena: Arena::new(),
        }
    }

    /// Create an empty tree with room for `capacity` nodes before the arena
    /// has to grow.
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` when `capacity` exceeds the number of addressable
    /// nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{NaturalOrder, RedBlackTree};
    ///
    /// let tree = RedBlackTree::<u64, String, _>::with_capacity(NaturalOrder, 1024).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(tree.arena_stats().total_capacity >= 1024);
    /// ```
    pub fn with_capacity(comparator: C, capacity: usize) -> InitResult<Self>
    where
        C: Comparator<K>,
    {
        if capacity > MAX_NODES {
            return Err(RedBlackTreeError::invalid_capacity(capacity, MAX_NODES));
        }

        Ok(Self {
            root: NULL_NODE,
            len: 0,
            comparator,
            arena: Arena::with_capacity(capacity),
        })
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<K: Ord, V> Default for RedBlackTree<K, V, NaturalOrder> {
    fn default() -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            comparator: NaturalOrder,
            arena: Arena::with_capacity(DEFAULT_ARENA_CAPACITY),
        }
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RedBlackTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}
