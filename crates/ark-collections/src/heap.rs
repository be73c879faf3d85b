//! Binary heap with a pluggable ordering function
//!
//! A complete binary tree stored in the growable array: the children of `i`
//! sit at `2i + 1` and `2i + 2`. For every non-root `i`,
//! `compare(items[i], items[parent(i)])` is not `Less`, so the root is the
//! minimum under `compare`. Ties never swap, so equal elements may come out
//! in any order.

use crate::buffer::GrowableArray;
use crate::element::{default_compare, reverse_compare, Element};
use crate::render::write_seq;
use crate::tuning::Tuning;
use std::cmp::Ordering;
use std::fmt;

/// Ordering function used by a [`Heap`]
pub type Comparator<T> = fn(&T, &T) -> Ordering;

pub struct Heap<T> {
    items: GrowableArray<T>,
    compare: Comparator<T>,
}

impl<T: Element> Heap<T> {
    /// Min-heap under [`default_compare`]
    ///
    /// # Example
    /// ```rust
    /// # use ark_collections::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(default_compare)
    }

    /// Max-heap under [`reverse_compare`]
    pub fn max() -> Self {
        Self::with_comparator(reverse_compare)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparator_and_capacity(default_compare, capacity)
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self::with_capacity(tuning.initial_capacity())
    }
}

impl<T> Heap<T> {
    /// Heap ordered by an arbitrary function; the "smallest" element is on top
    pub fn with_comparator(compare: Comparator<T>) -> Self {
        Self {
            items: GrowableArray::new(),
            compare,
        }
    }

    /// Custom ordering with pre-allocated capacity
    pub fn with_comparator_and_capacity(compare: Comparator<T>, capacity: usize) -> Self {
        Self {
            items: GrowableArray::with_capacity(capacity),
            compare,
        }
    }

    /// Custom ordering with the configured initial capacity
    pub fn with_comparator_and_tuning(compare: Comparator<T>, tuning: Tuning) -> Self {
        Self::with_comparator_and_capacity(compare, tuning.initial_capacity())
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove the top element; `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.pop_back()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let top = self.items.set(0, last);
        self.sift_down(0);
        Some(top)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.get(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.ensure_capacity(self.items.len() + additional);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Array order, not sorted order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Drain in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// `compare(items[a], items[b]) == Less`
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        match (self.items.get(a), self.items.get(b)) {
            (Some(x), Some(y)) => (self.compare)(x, y) == Ordering::Less,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.items.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut smallest = pos;
            if self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.items.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<T: Element> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Element> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Heap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, "Heap", ('[', ']'), self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
