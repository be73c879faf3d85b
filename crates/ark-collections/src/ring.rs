//! Ring discipline over the growable array, shared by Queue and Deque.
//!
//! `front` is the physical slot of logical element 0 and `rear` is the slot
//! the next `push_back` writes. Both are taken modulo capacity. When the
//! buffer is full the elements are re-linearized into a doubled buffer.

use crate::buffer::GrowableArray;

pub(crate) struct RingBuffer<T> {
    buf: GrowableArray<T>,
    front: usize,
    rear: usize,
}

impl<T> RingBuffer<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: GrowableArray::with_capacity(capacity),
            front: 0,
            rear: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    fn wrap_add(&self, index: usize, offset: usize) -> usize {
        (index + offset) % self.capacity()
    }

    #[inline]
    fn wrap_sub(&self, index: usize, offset: usize) -> usize {
        let cap = self.capacity();
        (index + cap - offset % cap) % cap
    }

    fn grow_if_full(&mut self) {
        if self.buf.is_full() {
            self.buf.grow_ring(self.front);
            self.front = 0;
            self.rear = self.buf.len();
        }
    }

    pub(crate) fn push_back(&mut self, item: T) {
        self.grow_if_full();
        self.buf.put(self.rear, item);
        self.rear = self.wrap_add(self.rear, 1);
    }

    pub(crate) fn push_front(&mut self, item: T) {
        self.grow_if_full();
        self.front = self.wrap_sub(self.front, 1);
        self.buf.put(self.front, item);
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buf.take(self.front);
        self.front = self.wrap_add(self.front, 1);
        item
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.rear = self.wrap_sub(self.rear, 1);
        self.buf.take(self.rear)
    }

    /// Logical index, 0 is the front
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.buf.slot(self.wrap_add(self.front, index))
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub(crate) fn back(&self) -> Option<&T> {
        match self.len() {
            0 => None,
            len => self.get(len - 1),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
        self.front = 0;
        self.rear = 0;
    }
}
