//! Runtime value representation
//!
//! Dynamically typed values that can share a single container:
//! - Numbers, Bools, Null: immediate values
//! - Strings: heap-allocated, reference-counted (Arc<String>), immutable
//! - Handles: opaque references to objects owned by other subsystems
//!   (streams, processes, timestamps). Containers store them, never inspect them.
//!
//! Cloning a `Value` is cheap (at most a refcount bump), so a container holding
//! a value never owns the underlying object: dropping the container only drops
//! its handle.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque reference to an object owned outside the collections engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    /// Producer-defined kind, e.g. "file" or "process"
    kind: Arc<str>,
    /// Producer-defined identity
    id: u64,
}

impl Handle {
    pub fn new(kind: impl Into<Arc<str>>, id: u64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// A dynamically typed value
#[derive(Clone)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (IEEE 754 double-precision)
    Number(f64),
    /// String value (reference-counted, immutable)
    String(Arc<String>),
    /// Opaque external object
    Handle(Handle),
}

impl Value {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a new opaque handle value
    pub fn handle(kind: impl Into<Arc<str>>, id: u64) -> Self {
        Value::Handle(Handle::new(kind, id))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Handle(_) => "handle",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Cross-type ordering: null < bool < number < string < handle
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Handle(_) => 4,
        }
    }
}

/// Numbers compare, hash and test equal through OrderedFloat so that NaN is
/// equal to itself and `0.0 == -0.0` hash identically.
fn number_key(n: f64) -> OrderedFloat<f64> {
    OrderedFloat(n)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => number_key(*a) == number_key(*b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Handle(a), Value::Handle(b)) => a == b,
            // Different variants are never equal
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => number_key(*a).cmp(&number_key(*b)),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Handle(a), Value::Handle(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => number_key(*n).hash(state),
            Value::String(s) => s.hash(state),
            Value::Handle(h) => h.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                // -0.0 is the same key as 0.0, so it prints the same
                let n = if *n == 0.0 { 0.0 } else { *n };
                // Format number nicely (no trailing .0 for whole numbers)
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s.as_ref()),
            Value::Handle(h) => write!(f, "<{} #{}>", h.kind, h.id),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Handle(h) => write!(f, "Handle({}#{})", h.kind, h.id),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::new(s))
    }
}

impl From<Handle> for Value {
    fn from(h: Handle) -> Self {
        Value::Handle(h)
    }
}
