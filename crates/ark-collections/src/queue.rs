//! Queue collection - FIFO (First-In-First-Out)
//!
//! Circular buffer with front/rear indices; enqueue and dequeue are
//! amortized O(1) and growth re-linearizes the live elements.

use crate::render::write_seq;
use crate::ring::RingBuffer;
use crate::tuning::{Tuning, DEFAULT_CAPACITY};
use std::fmt;

/// FIFO collection with O(1) enqueue/dequeue
pub struct Queue<T> {
    inner: RingBuffer<T>,
}

impl<T> Queue<T> {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create queue with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RingBuffer::with_capacity(capacity),
        }
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self::with_capacity(tuning.initial_capacity())
    }

    /// Add element to back of queue (FIFO order)
    pub fn enqueue(&mut self, item: T) {
        self.inner.push_back(item);
    }

    /// Remove and return element from front of queue
    ///
    /// Returns `None` if queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// View front element without removing
    ///
    /// Returns `None` if queue is empty.
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Get number of elements in queue
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Remove all elements from queue
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Front to rear
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Convert queue to vector (preserves FIFO order)
    ///
    /// Front of queue becomes first element.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, "Queue", ('[', ']'), self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
