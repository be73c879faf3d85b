//! Ark Collections - Generic containers over capability-typed values
//!
//! This library provides dynamically resizable containers:
//! - Stack, Queue and Deque over an amortized-doubling array buffer
//! - Set and HashMap using open addressing with linear probing
//! - LinkedList over an index arena
//! - Heap with a pluggable ordering function
//!
//! Hash and ordered containers compare and hash their elements through the
//! [`Element`] capability. Any `Eq + Ord + Hash + Display` type has it, and
//! [`Value`] provides a dynamically typed element so one container can hold
//! mixed types.
//!
//! # Example
//!
//! ```rust
//! use ark_collections::{Set, Stack, Value};
//!
//! let mut stack = Stack::new();
//! stack.push(Value::from(10));
//! stack.push(Value::from("twenty"));
//! assert_eq!(stack.to_string(), "Stack[10, twenty]");
//!
//! let mut set = Set::new();
//! set.add(Value::from(5));
//! assert!(!set.add(Value::from(5)));
//! ```

/// Ark collections version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod buffer;
mod render;
mod ring;
mod table;

pub mod deque;
pub mod element;
pub mod error;
pub mod hashmap;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod set;
pub mod stack;
pub mod tuning;
pub mod value;

pub use deque::Deque;
pub use element::{compute_hash, default_compare, reverse_compare, Element};
pub use error::{CollectionError, CollectionResult};
pub use hashmap::HashMap;
pub use heap::{Comparator, Heap};
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
pub use tuning::{Tuning, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR, MIN_MAX_LOAD_FACTOR};
pub use value::{Handle, Value};
