//! Requested field lists.
//!
//! A [`FieldSpec`] is the normalized form of the comma-separated list a
//! client passes in the query string (e.g. `?fields=firstName,lastName`).
//!
//! Normalization:
//! - names are split on `,` and trimmed
//! - empty names are discarded
//! - duplicates collapse to their first occurrence
//!
//! The order of names carries no meaning for the projection. It is kept as
//! given so that log output matches the request.

use std::fmt;

/// An ordered list of distinct, non-empty field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSpec {
    names: Vec<String>,
}

impl FieldSpec {
    /// Creates an empty field spec (no filtering).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated field list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slicer::FieldSpec;
    ///
    /// let spec = FieldSpec::parse("firstName, lastName,,firstName");
    /// assert_eq!(spec.as_slice(), &["firstName", "lastName"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Returns true if no field was requested.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of distinct requested fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if `name` was requested.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns an iterator over the requested names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the requested names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    fn push(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.contains(name) {
            self.names.push(name.to_string());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FieldSpec {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut spec = FieldSpec::new();
        for name in iter {
            spec.push(name.as_ref());
        }
        spec
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}
