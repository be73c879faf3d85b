//! Open-addressing table with linear probing
//!
//! The shared core of [`Set`](crate::Set) and [`HashMap`](crate::HashMap).
//! Keys and values live in parallel slot arrays; `keys[i]` is `Some` exactly
//! when slot `i` holds a live entry.
//!
//! # Probing
//!
//! A key's home slot is `hash64(key) % capacity`. Lookups walk forward one
//! slot at a time (wrapping) and stop at the first empty slot or the key.
//!
//! # Deletion
//!
//! Removal is tombstone-free. After a slot is emptied, every later entry of
//! the same cluster whose home does not lie cyclically in `(hole, j]` is
//! shifted back into the hole, so no probe chain is ever cut short.
//!
//! # Growth
//!
//! Before an insert that would take the load above `max_load_factor`, the
//! capacity doubles and every live entry is rehashed. Since the load factor
//! is below one, at least one slot is always empty.

use crate::buffer::capacity_overflow;
use crate::element::Element;
use crate::tuning::Tuning;
use tracing::trace;

pub(crate) struct OpenTable<K, V> {
    keys: Vec<Option<K>>,
    values: Vec<Option<V>>,
    len: usize,
    max_load_factor: f64,
}

impl<K: Element, V> OpenTable<K, V> {
    pub(crate) fn with_tuning(tuning: Tuning) -> Self {
        let capacity = tuning.initial_capacity().max(1);
        Self {
            keys: empty_slots(capacity),
            values: empty_slots(capacity),
            len: 0,
            max_load_factor: tuning.max_load_factor(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn home(&self, key: &K) -> usize {
        (key.hash64() % self.capacity() as u64) as usize
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Slot holding `key`, if present
    fn find(&self, key: &K) -> Option<usize> {
        let mut index = self.home(key);
        for _ in 0..self.capacity() {
            match &self.keys[index] {
                None => return None,
                Some(existing) if existing.equals(key) => return Some(index),
                Some(_) => index = self.next(index),
            }
        }
        None
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.find(key).and_then(|i| self.values[i].as_ref())
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.find(key) {
            Some(i) => self.values[i].as_mut(),
            None => None,
        }
    }

    /// Insert or overwrite; returns the displaced value on overwrite
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(i) = self.find(&key) {
            return self.values[i].replace(value);
        }

        let mut new_capacity = self.capacity();
        while (self.len + 1) as f64 > new_capacity as f64 * self.max_load_factor {
            new_capacity = new_capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow());
        }
        if new_capacity != self.capacity() {
            self.rehash(new_capacity);
        }

        self.insert_vacant(key, value);
        None
    }

    /// Place a key known to be absent into the first empty slot of its chain
    fn insert_vacant(&mut self, key: K, value: V) {
        let mut index = self.home(&key);
        for _ in 0..self.capacity() {
            if self.keys[index].is_none() {
                self.keys[index] = Some(key);
                self.values[index] = Some(value);
                self.len += 1;
                return;
            }
            index = self.next(index);
        }
        panic!(
            "probe sequence exhausted: {} entries in {} slots",
            self.len,
            self.capacity()
        );
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.find(key)?;
        let removed_key = self.keys[index].take()?;
        let removed_value = self.values[index].take()?;
        self.len -= 1;
        self.shift_back(index);
        Some((removed_key, removed_value))
    }

    /// Close the gap at `hole` by pulling displaced cluster members back
    fn shift_back(&mut self, mut hole: usize) {
        let mut j = self.next(hole);
        for _ in 0..self.capacity() {
            let home = match &self.keys[j] {
                None => return,
                Some(key) => self.home(key),
            };
            if !in_cyclic_range(home, hole, j) {
                self.keys[hole] = self.keys[j].take();
                self.values[hole] = self.values[j].take();
                hole = j;
            }
            j = self.next(j);
        }
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let keys = std::mem::replace(&mut self.keys, empty_slots(new_capacity));
        let values = std::mem::replace(&mut self.values, empty_slots(new_capacity));
        self.len = 0;

        for (key, value) in keys.into_iter().zip(values) {
            if let (Some(key), Some(value)) = (key, value) {
                self.insert_vacant(key, value);
            }
        }

        trace!(old_capacity, new_capacity, len = self.len, "table rehashed");
    }

    pub(crate) fn clear(&mut self) {
        self.keys.iter_mut().for_each(|slot| *slot = None);
        self.values.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Live entries in slot order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys
            .iter()
            .zip(self.values.iter())
            .filter_map(|(key, value)| Some((key.as_ref()?, value.as_ref()?)))
    }
}

/// Whether `home` lies in the cyclic interval `(hole, j]`
#[inline]
fn in_cyclic_range(home: usize, hole: usize, j: usize) -> bool {
    if hole <= j {
        hole < home && home <= j
    } else {
        home > hole || home <= j
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}
