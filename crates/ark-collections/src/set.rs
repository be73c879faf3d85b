//! Set Collection - Unique Value Storage
//!
//! Open-addressed hash set over [`Element`] values with O(1) average-case
//! membership testing.
//!
//! ## Features
//! - Unique value storage (re-adding an equal value is a no-op)
//! - Tombstone-free removal
//! - Set operations: union, intersection, difference
//! - Subset and disjointness testing

use crate::element::Element;
use crate::render::write_seq;
use crate::table::OpenTable;
use crate::tuning::Tuning;
use std::fmt;

/// Unique value collection with O(1) average operations
pub struct Set<T> {
    table: OpenTable<T, ()>,
}

impl<T: Element> Set<T> {
    /// Create new empty Set
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// Create Set with capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_tuning(Tuning::default().with_initial_capacity(capacity))
    }

    /// Create Set with a configured capacity and load factor
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            table: OpenTable::with_tuning(tuning),
        }
    }

    /// Add element to set, returns true if inserted (false if already existed)
    ///
    /// # Example
    /// ```rust
    /// # use ark_collections::Set;
    /// let mut set = Set::new();
    /// assert!(set.add(5));
    /// assert!(!set.add(5));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, item: T) -> bool {
        self.table.insert(item, ()).is_none()
    }

    /// Remove element from set, returns true if existed
    pub fn remove(&mut self, item: &T) -> bool {
        self.table.remove(item).is_some()
    }

    /// Check if element exists in set
    pub fn contains(&self, item: &T) -> bool {
        self.table.contains(item)
    }

    /// Get number of elements
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Allocated slots
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Remove all elements (capacity is kept)
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Elements in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.table.iter().map(|(item, _)| item)
    }

    /// Check if every element of self is in other
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Check if sets are disjoint (no common elements)
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        !self.iter().any(|item| other.contains(item))
    }
}

impl<T: Element + Clone> Set<T> {
    /// Set union: all elements in either set
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Set intersection: elements in both sets
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|item| other.contains(item))
            .cloned()
            .collect()
    }

    /// Set difference: elements in self but not in other
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect()
    }

    /// Convert to vector of elements (slot order)
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Element> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, "Set", ('{', '}'), self.iter())
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
