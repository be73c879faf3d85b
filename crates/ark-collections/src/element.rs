//! Value capability interface
//!
//! Every element stored in a hash or ordered container satisfies [`Element`]:
//! equality, three-way comparison, a deterministic 64-bit hash, and display.
//! Any `Eq + Ord + Hash + Display` type gets the capability for free.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Capability contract shared by every element and every key
pub trait Element: fmt::Display {
    /// Equality test used by Set and HashMap probing
    fn equals(&self, other: &Self) -> bool;

    /// Three-way comparison used by the default heap ordering
    fn compare(&self, other: &Self) -> Ordering;

    /// Deterministic 64-bit hash used to pick a home slot
    fn hash64(&self) -> u64;
}

impl<T> Element for T
where
    T: Eq + Ord + Hash + fmt::Display + ?Sized,
{
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    #[inline]
    fn hash64(&self) -> u64 {
        compute_hash(self)
    }
}

/// Compute deterministic hash for any hashable value
///
/// Uses Rust's DefaultHasher with fixed keys, so the same input always
/// produces the same output across runs.
pub fn compute_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Ascending order; the heap's default comparator (min-heap)
pub fn default_compare<T: Element>(a: &T, b: &T) -> Ordering {
    a.compare(b)
}

/// Descending order; turns a heap into a max-heap
pub fn reverse_compare<T: Element>(a: &T, b: &T) -> Ordering {
    b.compare(a)
}
