//! Growable array buffer
//!
//! Slot storage with explicit capacity and amortized doubling, shared by
//! Stack, Heap (contiguous use) and the ring that backs Queue and Deque.
//!
//! # Invariants
//!
//! - `len <= capacity`, and `len` always counts the occupied slots.
//! - Contiguous consumers keep slots `0..len` occupied and use
//!   `push_back`/`pop_back`/`get`/`set`/`swap`.
//! - Ring consumers address physical slots with `put`/`take`/`slot` and grow
//!   through [`GrowableArray::grow_ring`], which re-linearizes.
//! - Capacity never shrinks.

use crate::tuning::DEFAULT_CAPACITY;
use tracing::trace;

pub(crate) struct GrowableArray<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> GrowableArray<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Zero is bumped to one so doubling always makes progress
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    // ========================================================================
    // Contiguous access
    // ========================================================================

    pub(crate) fn push_back(&mut self, item: T) {
        if self.is_full() {
            self.grow_ring(0);
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Replace the element at `index`, returning the displaced one
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub(crate) fn set(&mut self, index: usize, item: T) -> T {
        assert!(
            index < self.len,
            "set index {} out of bounds for length {}",
            index,
            self.len
        );
        match self.slots[index].replace(item) {
            Some(old) => old,
            None => panic!("slot {} empty below length {}", index, self.len),
        }
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.len && b < self.len);
        self.slots.swap(a, b);
    }

    /// Grow (by doubling) until at least `min_capacity` slots exist
    pub(crate) fn ensure_capacity(&mut self, min_capacity: usize) {
        while self.capacity() < min_capacity {
            self.grow_ring(0);
        }
    }

    /// Elements `0..len` in index order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    // ========================================================================
    // Ring access
    // ========================================================================

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> Option<&T> {
        self.slots[index].as_ref()
    }

    /// Fill an empty physical slot
    pub(crate) fn put(&mut self, index: usize, item: T) {
        debug_assert!(self.slots[index].is_none(), "slot {} already occupied", index);
        self.slots[index] = Some(item);
        self.len += 1;
    }

    /// Empty a physical slot
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        let item = self.slots[index].take();
        if item.is_some() {
            self.len -= 1;
        }
        item
    }

    /// Double the capacity, moving the `len` live elements that start at
    /// physical `front` (wrapping) to indices `0..len` of the new storage.
    ///
    /// Callers using ring indices must reset `front = 0` and `rear = len`.
    pub(crate) fn grow_ring(&mut self, front: usize) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());

        let mut slots = empty_slots(new_capacity);
        for (logical, slot) in slots.iter_mut().take(self.len).enumerate() {
            *slot = self.slots[(front + logical) % old_capacity].take();
        }
        self.slots = slots;

        trace!(old_capacity, new_capacity, len = self.len, "buffer grown");
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
