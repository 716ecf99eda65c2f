//! Slot arena that owns every tree node.
//!
//! Nodes refer to each other by `NodeId` (a slot index) instead of by
//! pointer, so parent back-links never form ownership cycles. Freed slots are
//! recycled through a free list.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Sentinel ID standing in for an absent link
pub const NULL_NODE: NodeId = u32::MAX;

/// Largest number of live slots an arena can hand out.
pub const MAX_NODES: usize = NULL_NODE as usize;

/// Statistics for an arena
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Arena allocator backed by a `Vec` of optional slots and a free list
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    storage: Vec<Option<T>>,
    free_list: Vec<NodeId>,
    allocated: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub(crate) fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with pre-allocated capacity
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub(crate) fn allocate(&mut self, item: T) -> NodeId {
        self.allocated += 1;

        if let Some(id) = self.free_list.pop() {
            self.storage[id as usize] = Some(item);
            return id;
        }

        let index = self.storage.len();
        self.storage.push(Some(item));
        let id = NodeId::try_from(index).expect("Index should fit in NodeId");
        assert!(id != NULL_NODE, "arena exhausted: {} live nodes", MAX_NODES);
        id
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub(crate) fn deallocate(&mut self, id: NodeId) -> Option<T> {
        if id == NULL_NODE {
            return None;
        }

        let item = self.storage.get_mut(id as usize)?.take()?;
        self.free_list.push(id);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(id as usize)?.as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get_mut(id as usize)?.as_mut()
    }

    /// Borrow two distinct live slots mutably at once.
    ///
    /// Panics if `a == b` or either slot is not allocated.
    pub(crate) fn get2_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "get2_mut requires distinct slots");
        let (lo, hi, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.storage.split_at_mut(hi as usize);
        let lo_ref = head[lo as usize].as_mut().expect("stale NodeId");
        let hi_ref = tail[0].as_mut().expect("stale NodeId");
        if swapped {
            (hi_ref, lo_ref)
        } else {
            (lo_ref, hi_ref)
        }
    }

    /// Check if an ID is valid and allocated
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Drop every item and forget all slots
    pub(crate) fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Number of live items
    pub(crate) fn allocated_count(&self) -> usize {
        self.allocated
    }

    /// Number of slots waiting for reuse
    pub(crate) fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Get arena statistics
    pub(crate) fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_count();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        self.get(id).expect("stale NodeId")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.get_mut(id).expect("stale NodeId")
    }
}
