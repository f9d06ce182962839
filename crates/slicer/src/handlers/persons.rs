//! Person directory handlers.
//!
//! Serve a small person directory and demonstrate the three ways a handler
//! can opt into partial responses:
//!
//! - `GET /persons` sends through [`Slicer::json_with`] with a status code
//! - `GET /persons/{id}` sends through [`Slicer::json`]
//! - `GET /raw/persons` returns plain `Json`, sliced by the router middleware

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::debug;

use crate::adapter::{SlicedJson, Slicer};
use crate::error::{SlicerError, SlicerResult};
use crate::state::AppState;

/// Returns the demo person directory keyed by ID.
pub fn demo_persons() -> Vec<(String, Value)> {
    vec![
        (
            "1".to_string(),
            json!({
                "firstName": "André",
                "lastName": "König",
                "email": "andre.koenig@posteo.de"
            }),
        ),
        (
            "2".to_string(),
            json!({
                "firstName": "Hans",
                "lastName": "Müller",
                "email": "hans.mueller@gmail.com"
            }),
        ),
    ]
}

/// Handler listing all persons.
///
/// # HTTP Request
///
/// `GET [base]/persons?fields=firstName,lastName`
pub async fn list_persons_handler(State(state): State<AppState>, slicer: Slicer) -> SlicedJson {
    debug!(fields = %slicer.fields(), "Processing person list request");

    slicer.json_with((StatusCode::OK, state.persons_value()))
}

/// Handler reading one person.
///
/// # HTTP Request
///
/// `GET [base]/persons/{id}?fields=email`
///
/// # Response
///
/// - `200 OK` - The (possibly sliced) person
/// - `404 Not Found` - Unknown ID
pub async fn read_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    slicer: Slicer,
) -> SlicerResult<SlicedJson> {
    debug!(id = %id, fields = %slicer.fields(), "Processing person read request");

    let person = state.person(&id).ok_or_else(|| SlicerError::NotFound {
        resource: "persons".to_string(),
        id: id.clone(),
    })?;

    Ok(slicer.json(person))
}

/// Handler listing all persons without projection of its own.
///
/// Mounted behind [`slice_json_response`](crate::middleware::slice_json_response).
///
/// # HTTP Request
///
/// `GET [base]/raw/persons?fields=email`
pub async fn list_persons_raw_handler(State(state): State<AppState>) -> Json<Value> {
    debug!("Processing raw person list request");

    Json(state.persons_value())
}
