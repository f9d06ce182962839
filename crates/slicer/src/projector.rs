//! Field projection for partial responses.
//!
//! Given a record (or a sequence of records) and a list of requested
//! fields, the [`Projector`] builds new records holding only those fields.
//!
//! The outcome per record depends on the projector mode:
//!
//! | Requested fields present | strict | lenient |
//! |--------------------------|--------|---------|
//! | all | only those fields | only those fields |
//! | some | dropped | only the present fields |
//! | none | dropped | the whole record, unchanged |
//!
//! An empty field list means "no filter": records are returned as they are.
//!
//! Presence is own-key presence on the JSON object. A key holding `null` is
//! present; nothing is looked up anywhere else.

use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

use crate::adapter::envelope::rebuild_envelope;
use crate::fields::FieldSpec;
use crate::sliceable::{Record, Sliceable};

/// Configuration fixed for the lifetime of a [`Projector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectorConfig {
    /// Require every requested field for a record to survive.
    pub strict: bool,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// The result of extracting fields from one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<'a> {
    /// A fresh record holding only requested fields.
    Sliced(Record),
    /// The original record, returned unfiltered.
    Whole(&'a Record),
}

impl Extraction<'_> {
    /// Borrows the resulting record.
    pub fn as_record(&self) -> &Record {
        match self {
            Extraction::Sliced(record) => record,
            Extraction::Whole(record) => record,
        }
    }

    /// Converts into an owned record, cloning the original if needed.
    pub fn into_record(self) -> Record {
        match self {
            Extraction::Sliced(record) => record,
            Extraction::Whole(record) => record.clone(),
        }
    }

    /// Converts into an owned JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.into_record())
    }
}

/// Extracts the requested fields out of a record.
///
/// Returns `None` when the record must be dropped, which only happens in
/// strict mode when at least one requested field is missing. Repeated names
/// in `fields` count once.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use slicer::projector::extract_fields;
///
/// let person = json!({"firstName": "A", "lastName": "B", "email": "a@x"});
/// let record = person.as_object().unwrap();
///
/// let sliced = extract_fields(record, &["email"], true).unwrap();
/// assert_eq!(sliced.into_value(), json!({"email": "a@x"}));
///
/// assert!(extract_fields(record, &["email", "phone"], true).is_none());
/// ```
pub fn extract_fields<'a, S: AsRef<str>>(
    record: &'a Record,
    fields: &[S],
    strict: bool,
) -> Option<Extraction<'a>> {
    let mut requested = HashSet::with_capacity(fields.len());
    let mut extract = Record::new();

    for field in fields {
        let field = field.as_ref();
        if !requested.insert(field) {
            continue;
        }
        if let Some(value) = record.get(field) {
            extract.insert(field.to_string(), value.clone());
        }
    }

    if requested.is_empty() {
        return Some(Extraction::Whole(record));
    }

    if strict {
        if extract.len() < requested.len() {
            return None;
        }
    } else if extract.is_empty() {
        return Some(Extraction::Whole(record));
    }

    Some(Extraction::Sliced(extract))
}

/// Projects payloads down to requested fields.
///
/// A `Projector` only holds its configuration, so it is cheap to copy and
/// safe to share between concurrent requests.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use slicer::{FieldSpec, Projector, Sliceable};
///
/// let persons = json!([
///     {"firstName": "A", "lastName": "B", "email": "a@x"},
///     {"firstName": "C", "email": "c@x"}
/// ]);
/// let fields = FieldSpec::parse("firstName,lastName");
///
/// let strict = Projector::strict();
/// let sliced = strict.project(Sliceable::from_value(&persons).unwrap(), &fields);
/// assert_eq!(sliced, vec![json!({"firstName": "A", "lastName": "B"})]);
///
/// let lenient = Projector::lenient();
/// let sliced = lenient.project(Sliceable::from_value(&persons).unwrap(), &fields);
/// assert_eq!(sliced.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    /// Creates a projector with the given configuration.
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Creates a strict projector.
    pub fn strict() -> Self {
        Self::new(ProjectorConfig { strict: true })
    }

    /// Creates a lenient (non-strict) projector.
    pub fn lenient() -> Self {
        Self::new(ProjectorConfig { strict: false })
    }

    /// Returns the configuration.
    pub fn config(&self) -> ProjectorConfig {
        self.config
    }

    /// Returns whether records missing a requested field are dropped.
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Extracts the requested fields out of one record using this
    /// projector's mode.
    pub fn extract_fields<'a>(
        &self,
        record: &'a Record,
        fields: &FieldSpec,
    ) -> Option<Extraction<'a>> {
        extract_fields(record, fields.as_slice(), self.config.strict)
    }

    /// Projects a record or a sequence of records.
    ///
    /// The result is always a sequence: a single record yields zero or one
    /// element, a sequence of N records yields at most N elements in the
    /// original order. Sequence elements that are not objects are kept as
    /// they are.
    pub fn project(&self, sliceables: Sliceable<'_>, fields: &FieldSpec) -> Vec<Value> {
        let projected: Vec<Value> = match sliceables {
            Sliceable::Record(record) => self
                .extract_fields(record, fields)
                .map(Extraction::into_value)
                .into_iter()
                .collect(),
            Sliceable::Sequence(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(record) => {
                        self.extract_fields(record, fields).map(Extraction::into_value)
                    }
                    other => Some(other.clone()),
                })
                .collect(),
        };

        trace!(
            fields = %fields,
            strict = self.config.strict,
            input = sliceables.len(),
            output = projected.len(),
            "Projected payload"
        );

        projected
    }

    /// Projects a JSON payload and restores its original envelope.
    ///
    /// A sliced single record comes back as a bare object (`{}` when it was
    /// dropped), a sliced array as an array. Payloads that are neither
    /// objects nor arrays, and empty field specs, are returned unchanged.
    pub fn project_value(&self, payload: &Value, fields: &FieldSpec) -> Value {
        if fields.is_empty() {
            return payload.clone();
        }

        match Sliceable::from_value(payload) {
            Some(sliceables) => {
                rebuild_envelope(sliceables.cardinality(), self.project(sliceables, fields))
            }
            None => payload.clone(),
        }
    }
}
