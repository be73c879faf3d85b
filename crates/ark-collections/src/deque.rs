//! Double-ended queue
//!
//! Push and pop at both ends in amortized O(1). `push_front` steps the front
//! index back (mod capacity) before writing; a full buffer is re-linearized
//! into a doubled one.

use crate::render::write_seq;
use crate::ring::RingBuffer;
use crate::tuning::{Tuning, DEFAULT_CAPACITY};
use std::fmt;

/// Double-ended queue with O(1) push and pop at either end
pub struct Deque<T> {
    inner: RingBuffer<T>,
}

impl<T> Deque<T> {
    /// Create new empty deque
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create deque with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RingBuffer::with_capacity(capacity),
        }
    }

    /// Create deque with the configured initial capacity
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self::with_capacity(tuning.initial_capacity())
    }

    /// Add element before the current front
    pub fn push_front(&mut self, item: T) {
        self.inner.push_front(item);
    }

    /// Add element after the current back
    pub fn push_back(&mut self, item: T) {
        self.inner.push_back(item);
    }

    /// Remove and return the front element
    ///
    /// Returns `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Remove and return the back element
    ///
    /// Returns `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// View front element without removing
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// View back element without removing
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Element at logical position `index` (0 is the front)
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Get number of elements in deque
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if deque is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Remove all elements from deque
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.iter()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, "Deque", ('[', ']'), self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
