//! Node implementation for RedBlackTree.
//!
//! Nodes are plain records inside the arena. Structural surgery (linking,
//! rotation) lives on the tree in `tree_structure.rs`; this module only
//! covers what a single node can do on its own.

use crate::arena::{NodeId, NULL_NODE};
use crate::types::{Color, Node};

impl<K, V> Node<K, V> {
    /// New red node hanging under `parent` with no children.
    pub(crate) fn new(key: K, value: V, parent: NodeId) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Parent handle, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        link(self.parent)
    }

    pub fn left(&self) -> Option<NodeId> {
        link(self.left)
    }

    pub fn right(&self) -> Option<NodeId> {
        link(self.right)
    }

    /// Replace the stored value, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Exchange key and value with `other`. Colors and links stay put, so
    /// both nodes keep their identity and position in the tree.
    pub(crate) fn swap_entry(&mut self, other: &mut Node<K, V>) {
        std::mem::swap(&mut self.key, &mut other.key);
        std::mem::swap(&mut self.value, &mut other.value);
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[inline]
fn link(id: NodeId) -> Option<NodeId> {
    (id != NULL_NODE).then_some(id)
}
