//! Iterator implementations for RedBlackTree.
//!
//! `Cursor` is the stateful bidirectional cursor: it can sit before the
//! first entry, on an entry, or after the last one, and moves by following
//! parent links (no stack, no recursion). `Iter` is the plain Rust iterator
//! built on the same successor/predecessor walks.
//!
//! Both borrow the tree immutably, so the tree cannot be mutated while
//! either is alive.

use crate::arena::{NodeId, NULL_NODE};
use crate::error::{RedBlackTreeError, TreeResult};
use crate::types::RedBlackTree;

// ============================================================================
// CURSOR
// ============================================================================

/// Where a cursor currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before the first entry.
    Begin,
    /// On the node with this handle.
    Between(NodeId),
    /// After the last entry.
    End,
}

/// Stateful bidirectional cursor over a tree.
///
/// # Examples
///
/// ```
/// use rbtree::RedBlackTree;
///
/// let tree: RedBlackTree<_, _> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
/// let mut cursor = tree.iterator();
///
/// let mut forward = Vec::new();
/// while cursor.next() {
///     forward.push(*cursor.key());
/// }
/// assert_eq!(forward, vec![1, 2, 3]);
///
/// let mut backward = Vec::new();
/// while cursor.prev() {
///     backward.push(*cursor.value());
/// }
/// assert_eq!(backward, vec!['c', 'b', 'a']);
/// ```
pub struct Cursor<'a, K, V, C> {
    tree: &'a RedBlackTree<K, V, C>,
    position: Position,
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K, V, C> std::fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(crate) fn new(tree: &'a RedBlackTree<K, V, C>, position: Position) -> Self {
        Self { tree, position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Advance to the next entry. Returns `false` (and parks after the last
    /// entry) when there is none.
    pub fn next(&mut self) -> bool {
        let next = match self.position {
            Position::End => NULL_NODE,
            Position::Begin => self.tree.min_from(self.tree.root),
            Position::Between(id) => self.tree.successor(id),
        };
        self.settle(next, Position::End)
    }

    /// Step back to the previous entry. Returns `false` (and parks before
    /// the first entry) when there is none.
    pub fn prev(&mut self) -> bool {
        let prev = match self.position {
            Position::Begin => NULL_NODE,
            Position::End => self.tree.max_from(self.tree.root),
            Position::Between(id) => self.tree.predecessor(id),
        };
        self.settle(prev, Position::Begin)
    }

    /// Park before the first entry.
    pub fn begin(&mut self) {
        self.position = Position::Begin;
    }

    /// Park after the last entry.
    pub fn end(&mut self) {
        self.position = Position::End;
    }

    /// Move to the smallest entry. `false` on an empty tree.
    pub fn first(&mut self) -> bool {
        self.begin();
        self.next()
    }

    /// Move to the largest entry. `false` on an empty tree.
    pub fn last(&mut self) -> bool {
        self.end();
        self.prev()
    }

    /// Advance until `predicate` accepts the current entry. Leaves the
    /// cursor after the last entry and returns `false` if nothing matches.
    pub fn next_to<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        while self.next() {
            let (key, value) = self.entry();
            if predicate(key, value) {
                return true;
            }
        }
        false
    }

    /// Step back until `predicate` accepts the current entry. Leaves the
    /// cursor before the first entry and returns `false` if nothing matches.
    pub fn prev_to<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        while self.prev() {
            let (key, value) = self.entry();
            if predicate(key, value) {
                return true;
            }
        }
        false
    }

    /// Handle of the current node.
    pub fn node(&self) -> Option<NodeId> {
        match self.position {
            Position::Between(id) => Some(id),
            _ => None,
        }
    }

    /// Key under the cursor.
    ///
    /// # Panics
    ///
    /// If the cursor is before the first or after the last entry. Check the
    /// return value of the last movement call first.
    pub fn key(&self) -> &'a K {
        self.entry().0
    }

    /// Value under the cursor.
    ///
    /// # Panics
    ///
    /// Same contract as [`Cursor::key`].
    pub fn value(&self) -> &'a V {
        self.entry().1
    }

    /// Current entry, or `InvalidState` when the cursor is not on a node.
    pub fn current(&self) -> TreeResult<(&'a K, &'a V)> {
        let state = match self.position {
            Position::Between(id) => {
                let tree: &'a RedBlackTree<K, V, C> = self.tree;
                return tree
                    .arena
                    .get(id)
                    .map(|node| (&node.key, &node.value))
                    .ok_or_else(|| RedBlackTreeError::arena_error("cursor read", "stale node handle"));
            }
            Position::Begin => "before-first",
            Position::End => "after-last",
        };
        Err(RedBlackTreeError::invalid_state("read entry", state))
    }

    fn entry(&self) -> (&'a K, &'a V) {
        match self.current() {
            Ok(entry) => entry,
            Err(e) => panic!("cursor is not positioned on a node: {}", e),
        }
    }

    fn settle(&mut self, id: NodeId, exhausted: Position) -> bool {
        if id == NULL_NODE {
            self.position = exhausted;
            false
        } else {
            self.position = Position::Between(id);
            true
        }
    }
}

// ============================================================================
// RUST ITERATORS
// ============================================================================

/// Double-ended iterator over entries in key order.
pub struct Iter<'a, K, V, C> {
    tree: &'a RedBlackTree<K, V, C>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree: &'a RedBlackTree<K, V, C> = self.tree;
        let node = tree.arena.get(self.front)?;
        self.front = tree.successor(self.front);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree: &'a RedBlackTree<K, V, C> = self.tree;
        let node = tree.arena.get(self.back)?;
        self.back = tree.predecessor(self.back);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {}

impl<K, V, C> std::iter::FusedIterator for Iter<'_, K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<K, V, C> RedBlackTree<K, V, C> {
    /// A cursor parked before the first entry.
    pub fn iterator(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, Position::Begin)
    }

    /// A cursor sitting on `node`, or `None` if the handle is not live.
    ///
    /// A handle taken before a mutation may point at a recycled slot
    /// afterwards; only use handles obtained since the last mutation.
    pub fn iterator_at(&self, node: NodeId) -> Option<Cursor<'_, K, V, C>> {
        self.arena
            .contains(node)
            .then(|| Cursor::new(self, Position::Between(node)))
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: self,
            front: self.min_from(self.root),
            back: self.max_from(self.root),
            remaining: self.len,
        }
    }

    /// Snapshot of all keys in order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Snapshot of all values in key order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::RedBlackTree;

    fn tree_of(keys: &[i32]) -> RedBlackTree<i32, i32> {
        let mut tree = RedBlackTree::default();
        for &key in keys {
            tree.put(key, key * 10);
        }
        tree
    }

    #[test]
    fn test_cursor_on_empty_tree() {
        let tree = tree_of(&[]);
        let mut cursor = tree.iterator();
        assert!(!cursor.next());
        assert_eq!(cursor.position(), Position::End);
        assert!(!cursor.prev());
        assert_eq!(cursor.position(), Position::Begin);
        assert!(!cursor.first());
        assert!(!cursor.last());
        assert!(cursor.current().is_err());
    }

    #[test]
    fn test_next_from_end_stays_at_end() {
        let tree = tree_of(&[1, 2]);
        let mut cursor = tree.iterator();
        cursor.end();
        assert!(!cursor.next());
        assert_eq!(cursor.position(), Position::End);
        assert!(cursor.prev());
        assert_eq!(*cursor.key(), 2);
    }

    #[test]
    fn test_first_last() {
        let tree = tree_of(&[5, 1, 9, 3]);
        let mut cursor = tree.iterator();
        assert!(cursor.last());
        assert_eq!(*cursor.key(), 9);
        assert!(cursor.first());
        assert_eq!(*cursor.key(), 1);
        assert!(!cursor.prev());
        assert_eq!(cursor.position(), Position::Begin);
    }

    #[test]
    fn test_next_to_and_prev_to() {
        let tree = tree_of(&[1, 2, 3, 4, 5, 6]);
        let mut cursor = tree.iterator();

        assert!(cursor.next_to(|key, _| key % 3 == 0));
        assert_eq!(*cursor.key(), 3);
        assert!(cursor.next_to(|key, _| key % 3 == 0));
        assert_eq!(*cursor.value(), 60);
        assert!(!cursor.next_to(|key, _| key % 3 == 0));
        assert_eq!(cursor.position(), Position::End);

        assert!(cursor.prev_to(|_, value| *value < 25));
        assert_eq!(*cursor.key(), 2);
        assert!(!cursor.prev_to(|key, _| *key > 100));
        assert_eq!(cursor.position(), Position::Begin);
    }

    #[test]
    fn test_iterator_at_node() {
        let tree = tree_of(&[10, 20, 30, 40]);
        let id = tree.get_node(&20).unwrap();
        let mut cursor = tree.iterator_at(id).unwrap();
        assert_eq!(*cursor.key(), 20);
        assert!(cursor.next());
        assert_eq!(*cursor.key(), 30);
        assert!(cursor.prev() && cursor.prev());
        assert_eq!(*cursor.key(), 10);
        assert_eq!(cursor.node(), tree.get_node(&10));
    }

    #[test]
    fn test_iterator_at_stale_handle() {
        let mut tree = tree_of(&[1, 2, 3]);
        let id = tree.get_node(&3).unwrap();
        tree.remove(&3);
        assert!(tree.iterator_at(id).is_none());
    }

    #[test]
    #[should_panic(expected = "cursor is not positioned on a node")]
    fn test_key_before_first_panics() {
        let tree = tree_of(&[1]);
        let cursor = tree.iterator();
        let _ = cursor.key();
    }

    #[test]
    fn test_iter_both_ends() {
        let tree = tree_of(&[3, 1, 4, 5, 9, 2, 6]);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some((&1, &10)));
        assert_eq!(iter.next_back(), Some((&9, &90)));
        let middle: Vec<i32> = iter.map(|(k, _)| *k).collect();
        assert_eq!(middle, vec![2, 3, 4, 5, 6]);

        let reversed: Vec<i32> = tree.iter().rev().map(|(k, _)| *k).collect();
        assert_eq!(reversed, vec![9, 6, 5, 4, 3, 2, 1]);

        let mut count = 0;
        for (key, value) in &tree {
            assert_eq!(*value, key * 10);
            count += 1;
        }
        assert_eq!(count, tree.len());
    }
}
