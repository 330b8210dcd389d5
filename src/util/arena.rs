//! Slot arena with a free list
//!
//! Linked structures (tree, list) store their nodes here and link them by
//! index. One arena owns every node of one container, so there is no shared
//! ownership and no reference cycle even for doubly-linked shapes.

use std::ops::{Index, IndexMut};

/// Index of a value inside an [`Arena`].
pub type SlotId = usize;

/// Vec-backed slot storage; released slots are reused by later allocations.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<SlotId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, reusing a released slot when one is available.
    pub fn alloc(&mut self, value: T) -> SlotId {
        if let Some(id) = self.free.pop() {
            self.slots[id] = Some(value);
            return id;
        }
        self.slots.push(Some(value));
        self.slots.len() - 1
    }

    /// Take a value out, freeing its slot.
    ///
    /// Panics if `id` is vacant: a double release is a container bug.
    pub fn release(&mut self, id: SlotId) -> T {
        let value = self.slots[id]
            .take()
            .unwrap_or_else(|| panic!("release of vacant arena slot {id}"));
        self.free.push(id);
        value
    }

    /// Number of live values.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<T> Index<SlotId> for Arena<T> {
    type Output = T;

    fn index(&self, id: SlotId) -> &T {
        self.slots[id]
            .as_ref()
            .unwrap_or_else(|| panic!("dangling link to arena slot {id}"))
    }
}

impl<T> IndexMut<SlotId> for Arena<T> {
    fn index_mut(&mut self, id: SlotId) -> &mut T {
        self.slots[id]
            .as_mut()
            .unwrap_or_else(|| panic!("dangling link to arena slot {id}"))
    }
}
