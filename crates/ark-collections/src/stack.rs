//! Stack collection - LIFO (Last-In-First-Out)
//!
//! Backed by the growable array buffer; the top is the last occupied slot.

use crate::buffer::GrowableArray;
use crate::render::write_seq;
use crate::tuning::Tuning;
use std::fmt;

/// LIFO collection with amortized O(1) push/pop
pub struct Stack<T> {
    items: GrowableArray<T>,
}

impl<T> Stack<T> {
    /// Create new empty stack
    ///
    /// # Example
    /// ```rust
    /// # use ark_collections::Stack;
    /// let stack: Stack<i32> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            items: GrowableArray::new(),
        }
    }

    /// Create stack with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: GrowableArray::with_capacity(capacity),
        }
    }

    /// Create stack using a configured initial capacity
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self::with_capacity(tuning.initial_capacity())
    }

    /// Push element onto top of stack (LIFO order)
    ///
    /// # Example
    /// ```rust
    /// # use ark_collections::{Stack, Value};
    /// let mut stack = Stack::new();
    /// stack.push(Value::Number(1.0));
    /// stack.push(Value::string("hello"));
    /// assert_eq!(stack.len(), 2);
    /// ```
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Pop element from top of stack
    ///
    /// Returns `None` if stack is empty.
    ///
    /// # Example
    /// ```rust
    /// # use ark_collections::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// View top element without removing
    ///
    /// Returns `None` if stack is empty.
    pub fn peek(&self) -> Option<&T> {
        match self.items.len() {
            0 => None,
            len => self.items.get(len - 1),
        }
    }

    /// Get number of elements in stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slots; never shrinks
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Make room for at least `additional` more pushes without regrowing
    pub fn reserve(&mut self, additional: usize) {
        self.items.ensure_capacity(self.items.len() + additional);
    }

    /// Remove all elements from stack (capacity is kept)
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Clone> Stack<T> {
    /// Convert stack to vector (bottom to top order)
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, "Stack", ('[', ']'), self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
