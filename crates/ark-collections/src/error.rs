//! Errors for caller-supplied input
//!
//! Empty containers and lookup misses are not errors; they return `None` or
//! `false`. Only bad indices and bad tuning values are reported here.

use thiserror::Error;

/// Collection error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
    /// Positional access past the end of a sequence
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Initial capacity must hold at least one element
    #[error("Invalid capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    /// Load factor outside [0.1, 1)
    #[error("Invalid load factor {0}: must be at least 0.1 and below 1")]
    InvalidLoadFactor(f64),
}

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;
