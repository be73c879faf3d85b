//! Shared helpers for collection integration tests

#![allow(dead_code)]

use ark_collections::{Element, Value};
use std::cmp::Ordering;
use std::fmt;

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Numbers as runtime values
pub fn numbers(items: &[f64]) -> Vec<Value> {
    items.iter().copied().map(Value::Number).collect()
}

/// Key that always hashes to the same bucket, forcing long probe chains
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colliding(pub u32);

impl fmt::Display for Colliding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl Element for Colliding {
    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn hash64(&self) -> u64 {
        7
    }
}
