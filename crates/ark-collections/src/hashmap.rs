//! HashMap collection implementation
//!
//! Key-value store over the open-addressing table. Keys are compared and
//! hashed through [`Element`]; values are unconstrained.

use crate::element::Element;
use crate::render::write_entries;
use crate::table::OpenTable;
use crate::tuning::Tuning;
use std::fmt;

/// Key-value collection with O(1) average operations
pub struct HashMap<K, V> {
    table: OpenTable<K, V>,
}

impl<K: Element, V> HashMap<K, V> {
    /// Create new empty HashMap with default capacity
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// Create HashMap with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_tuning(Tuning::default().with_initial_capacity(capacity))
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            table: OpenTable::with_tuning(tuning),
        }
    }

    /// Insert key-value pair, returns previous value if existed
    ///
    /// An existing key keeps its slot and the size is unchanged.
    ///
    /// # Example
    /// ```rust
    /// # use ark_collections::{HashMap, Value};
    /// let mut map = HashMap::new();
    /// assert_eq!(map.put(Value::string("k"), 1), None);
    /// assert_eq!(map.put(Value::string("k"), 2), Some(1));
    /// assert_eq!(map.get(&Value::string("k")), Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.insert(key, value)
    }

    /// Get value by key (returns None if not found)
    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    /// Remove key-value pair, returns value if existed
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove(key).map(|(_, value)| value)
    }

    /// Check if key exists
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Get number of entries
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

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Entries in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.table.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<K: Element, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Element, V> Extend<(K, V)> for HashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Element, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Element, V: fmt::Display> fmt::Display for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, "HashMap", self.iter())
    }
}

impl<K: Element + fmt::Debug, V: fmt::Debug> fmt::Debug for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
