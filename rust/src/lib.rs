//! Red-black tree engine in Rust.
//!
//! This crate provides a sorted associative container built on a red-black
//! tree whose nodes live in an index-addressed arena. Ordering comes
//! exclusively from a comparator supplied at construction; there is no
//! implicit fallback to `Ord` inside the engine.
//!
//! Besides the usual map operations (`put`, `get`, `remove`) the tree offers
//! extremes (`left`, `right`), `floor` / `ceiling` queries and a stateful
//! bidirectional [`Cursor`] that walks the tree through parent links.
//!
//! The tree is single-threaded and carries no internal synchronization.
//! Wrap it in a lock if it must be shared across threads.
//!
//! # Examples
//!
//! ```
//! use rbtree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new(|a: &i32, b: &i32| a.cmp(b));
//! for key in [5, 6, 7, 3, 4, 1, 2] {
//!     tree.put(key, key * 100);
//! }
//! assert!(tree.remove(&6));
//! assert_eq!(tree.keys(), vec![1, 2, 3, 4, 5, 7]);
//!
//! let mut cursor = tree.iterator();
//! assert!(cursor.next_to(|key, _| *key > 4));
//! assert_eq!(*cursor.key(), 5);
//! ```

#[macro_use]
mod macros;

mod arena;
mod comparator;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use arena::{ArenaStats, NodeId, MAX_NODES, NULL_NODE};
pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use error::{
    InitResult, KeyResult, ModifyResult, RedBlackTreeError, TreeResult, TreeResultExt,
};
pub use iteration::{Cursor, Iter, Position};
pub use types::{Color, Node, RedBlackTree, DEFAULT_ARENA_CAPACITY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_insert_with_overwrite() {
        let mut tree = RedBlackTree::new(NaturalOrder);
        tree.put(5, "e");
        tree.put(6, "f");
        tree.put(7, "g");
        tree.put(3, "c");
        tree.put(4, "d");
        tree.put(1, "x");
        tree.put(1, "a");
        tree.put(2, "b");

        assert_eq!(tree.keys(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.values(), vec!["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(tree.len(), 7);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_scenario_small_tree_queries() {
        let mut tree = RedBlackTree::new(NaturalOrder);
        tree.put(3, ());
        tree.put(1, ());
        tree.put(2, ());

        let key_at = |id: Option<NodeId>| id.and_then(|id| tree.node(id)).map(|n| *n.key());
        assert_eq!(key_at(tree.left()), Some(1));
        assert_eq!(key_at(tree.right()), Some(3));
        assert_eq!(tree.floor(&2).map(|(k, _)| *k), Some(2));
        assert_eq!(tree.ceiling(&2).map(|(k, _)| *k), Some(2));
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.ceiling(&4), None);
    }

    #[test]
    fn test_idempotent_put_and_remove() {
        let mut once = RedBlackTree::new(NaturalOrder);
        let mut twice = RedBlackTree::new(NaturalOrder);
        for key in [4, 8, 15, 16, 23, 42] {
            once.put(key, key);
            twice.put(key, key);
            twice.put(key, key);
        }
        assert_eq!(once.keys(), twice.keys());
        assert_eq!(once.len(), twice.len());

        assert!(once.remove(&15));
        assert!(twice.remove(&15));
        assert!(!twice.remove(&15));
        assert_eq!(once.keys(), twice.keys());
        assert_eq!(once.len(), twice.len());
    }
}
