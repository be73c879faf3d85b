//! Doubly linked list over an index arena
//!
//! Nodes live in a `Vec` slot arena and link to each other by index, so the
//! `prev` links never own anything. Freed slots are recycled through a free
//! list.
//!
//! # Invariants
//!
//! - `head.is_none() == tail.is_none() == (len == 0)`.
//! - Following `next` from `head` visits exactly `len` nodes and ends at
//!   `tail`. `head.prev` and `tail.next` are `None`.
//! - Every arena slot is either a live node or listed in `free`.

use crate::error::{CollectionError, CollectionResult};
use crate::render::write_seq;
use crate::tuning::Tuning;
use std::fmt;

struct Node<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct LinkedList<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Pre-size the node arena
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            nodes: Vec::with_capacity(tuning.initial_capacity()),
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Arena
    // ========================================================================

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        match self.nodes[idx].take() {
            Some(node) => {
                self.free.push(idx);
                node
            }
            None => dangling(idx),
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.nodes[idx] {
            Some(node) => node,
            None => dangling(idx),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.nodes[idx] {
            Some(node) => node,
            None => dangling(idx),
        }
    }

    /// Arena slot of the node at `index`, walking from the nearer end.
    /// Caller guarantees `index < len`.
    fn locate(&self, index: usize) -> usize {
        let (mut cursor, steps, forward) = if index <= self.len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, self.len - 1 - index, false)
        };
        for _ in 0..steps {
            cursor = cursor.and_then(|idx| {
                let node = self.node(idx);
                if forward {
                    node.next
                } else {
                    node.prev
                }
            });
        }
        match cursor {
            Some(idx) => idx,
            None => panic!("list chain shorter than length {}", self.len),
        }
    }

    /// Detach a live node and return its data
    fn unlink(&mut self, idx: usize) -> T {
        let node = self.release(idx);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.data
    }

    // ========================================================================
    // Ends
    // ========================================================================

    pub fn add_first(&mut self, item: T) {
        let idx = self.alloc(Node {
            data: item,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    pub fn add_last(&mut self, item: T) {
        let idx = self.alloc(Node {
            data: item,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Returns `None` if the list is empty
    pub fn remove_first(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Returns `None` if the list is empty
    pub fn remove_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).data)
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).data)
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Insert so that the item ends up at `index`; `index == len` appends
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index > len`.
    pub fn add_at(&mut self, index: usize, item: T) -> CollectionResult<()> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        if index == 0 {
            self.add_first(item);
            return Ok(());
        }
        if index == self.len {
            self.add_last(item);
            return Ok(());
        }

        let at = self.locate(index);
        let prev = self.node(at).prev;
        let idx = self.alloc(Node {
            data: item,
            prev,
            next: Some(at),
        });
        if let Some(prev) = prev {
            self.node_mut(prev).next = Some(idx);
        }
        self.node_mut(at).prev = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// # Errors
    /// `IndexOutOfBounds` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let idx = self.locate(index);
        Ok(self.unlink(idx))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.node(self.locate(index)).data)
    }

    /// Replace the item at `index`, returning the old one
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, item: T) -> CollectionResult<T> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let idx = self.locate(index);
        Ok(std::mem::replace(&mut self.node_mut(idx).data, item))
    }

    fn out_of_bounds(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

#[cold]
fn dangling(idx: usize) -> ! {
    panic!("list link {} points at a freed node", idx)
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.node(idx);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, "LinkedList", ('[', ']'), self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
