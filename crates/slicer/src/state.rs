//! Application state for the slicer server.
//!
//! Holds the shared [`Projector`], the server configuration, and the demo
//! person directory served by the handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::FromRef;
use serde_json::Value;

use crate::config::SlicerConfig;
use crate::handlers::persons::demo_persons;
use crate::middleware::fields::FieldsParam;
use crate::projector::Projector;

/// Shared application state.
///
/// # Example
///
/// ```rust
/// use slicer::{AppState, SlicerConfig};
///
/// let state = AppState::new(SlicerConfig::default());
/// assert!(state.projector().is_strict());
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The projector, fixed for the lifetime of the server.
    projector: Projector,

    /// Server configuration.
    config: Arc<SlicerConfig>,

    /// Person records keyed by ID.
    persons: Arc<BTreeMap<String, Value>>,
}

impl AppState {
    /// Creates a new AppState seeded with the demo person directory.
    pub fn new(config: SlicerConfig) -> Self {
        Self::with_persons(config, demo_persons())
    }

    /// Creates a new AppState serving the given persons.
    pub fn with_persons<I>(config: SlicerConfig, persons: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            projector: Projector::new(config.projector_config()),
            config: Arc::new(config),
            persons: Arc::new(persons.into_iter().collect()),
        }
    }

    /// Returns the projector.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &SlicerConfig {
        &self.config
    }

    /// Returns the name of the query parameter holding the field list.
    pub fn fields_param(&self) -> &str {
        &self.config.fields_param
    }

    /// Returns all persons, ordered by ID.
    pub fn persons(&self) -> impl Iterator<Item = &Value> {
        self.persons.values()
    }

    /// Returns all persons as a JSON array.
    pub fn persons_value(&self) -> Value {
        Value::Array(self.persons().cloned().collect())
    }

    /// Looks up a person by ID.
    pub fn person(&self, id: &str) -> Option<&Value> {
        self.persons.get(id)
    }
}

impl FromRef<AppState> for Projector {
    fn from_ref(state: &AppState) -> Self {
        state.projector
    }
}

impl FromRef<AppState> for FieldsParam {
    fn from_ref(state: &AppState) -> Self {
        FieldsParam(state.config.fields_param.clone())
    }
}
