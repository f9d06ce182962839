//! Borrowed views over payloads eligible for projection.

use serde_json::{Map, Value};

/// A JSON object: string keys mapped to arbitrary values.
pub type Record = Map<String, Value>;

/// Whether a payload was a single record or a sequence of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// A bare JSON object.
    Single,
    /// A JSON array.
    Many,
}

/// A record or an ordered sequence of records.
///
/// Borrowed from the caller's payload; projection never mutates it.
#[derive(Debug, Clone, Copy)]
pub enum Sliceable<'a> {
    /// A single JSON object.
    Record(&'a Record),
    /// A JSON array. Elements that are not objects pass through projection.
    Sequence(&'a [Value]),
}

impl<'a> Sliceable<'a> {
    /// Classifies a JSON value.
    ///
    /// Returns `None` for scalars and `null`, which are never projected.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(record) => Some(Sliceable::Record(record)),
            Value::Array(items) => Some(Sliceable::Sequence(items)),
            _ => None,
        }
    }

    /// Returns the cardinality of the original payload.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Sliceable::Record(_) => Cardinality::Single,
            Sliceable::Sequence(_) => Cardinality::Many,
        }
    }

    /// Number of elements once normalized to a sequence.
    pub fn len(&self) -> usize {
        match self {
            Sliceable::Record(_) => 1,
            Sliceable::Sequence(items) => items.len(),
        }
    }

    /// Returns true for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a Record> for Sliceable<'a> {
    fn from(record: &'a Record) -> Self {
        Sliceable::Record(record)
    }
}

impl<'a> From<&'a [Value]> for Sliceable<'a> {
    fn from(items: &'a [Value]) -> Self {
        Sliceable::Sequence(items)
    }
}

impl<'a> From<&'a Vec<Value>> for Sliceable<'a> {
    fn from(items: &'a Vec<Value>) -> Self {
        Sliceable::Sequence(items.as_slice())
    }
}
