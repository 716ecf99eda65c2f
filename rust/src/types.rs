//! Core types and data structures for RedBlackTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the red-black tree implementation.

use crate::arena::{Arena, NodeId};
use crate::comparator::NaturalOrder;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Arena slots reserved by `RedBlackTree::default()`.
pub const DEFAULT_ARENA_CAPACITY: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Node color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A tree vertex. Links are arena indices; `NULL_NODE` marks an absent link.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

/// Red-black tree keyed by an explicit comparator.
///
/// Every vertex lives in an arena owned by the tree; parent and child links
/// are `NodeId` indices into it. After every public mutation the tree obeys
/// the usual red-black rules: the root is black, no red node has a red
/// child, and every path from a node down to an absent child crosses the
/// same number of black nodes. Height therefore stays within `2·log2(n+1)`.
///
/// # Type Parameters
///
/// * `K` - Key type, ordered only through `C`
/// * `V` - Value type
/// * `C` - Comparator strategy, see [`Comparator`](crate::Comparator)
///
/// # Examples
///
/// ```
/// use rbtree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new(|a: &i32, b: &i32| a.cmp(b));
/// tree.put(3, "three");
/// tree.put(1, "one");
/// tree.put(2, "two");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.keys(), vec![1, 2, 3]);
/// assert_eq!(tree.floor(&5), Some((&3, &"three")));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n)
/// - **Floor / ceiling**: O(log n)
/// - **Cursor step**: amortized O(1), O(log n) worst case
/// - **len**: O(1)
#[derive(Debug, Clone)]
pub struct RedBlackTree<K, V, C = NaturalOrder> {
    /// Root node, or `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Number of live entries.
    pub(crate) len: usize,
    /// Ordering strategy supplied at construction.
    pub(crate) comparator: C,
    /// Owner of every node slot.
    pub(crate) arena: Arena<Node<K, V>>,
}
