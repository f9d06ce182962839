//! Response decorator applying field projection to JSON responses.
//!
//! [`Slicer`] is extracted per request. It carries the shared [`Projector`]
//! and the fields the client asked for, and wraps the handler's way of
//! sending JSON:
//!
//! ```rust,ignore
//! async fn list(State(state): State<AppState>, slicer: Slicer) -> SlicedJson {
//!     slicer.json_with((StatusCode::OK, state.persons_value()))
//! }
//! ```
//!
//! Handlers that already own a sending function can wrap it instead with
//! [`Slicer::entangle`].

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::adapter::shape::Shape;
use crate::error::SlicerResult;
use crate::fields::FieldSpec;
use crate::middleware::fields::{FieldsParam, RequestedFields};
use crate::projector::Projector;

/// Per-request projection context.
#[derive(Debug, Clone, Default)]
pub struct Slicer {
    projector: Projector,
    fields: FieldSpec,
}

impl Slicer {
    /// Creates a slicer for the given projector and requested fields.
    pub fn new(projector: Projector, fields: FieldSpec) -> Self {
        Self { projector, fields }
    }

    /// Returns the projector.
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Returns the requested fields.
    pub fn fields(&self) -> &FieldSpec {
        &self.fields
    }

    /// Returns true if the client requested a field subset.
    pub fn is_active(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Projects a payload and restores its envelope.
    ///
    /// Without requested fields, or for payloads that are neither objects
    /// nor arrays, the payload is returned unchanged.
    pub fn slice(&self, payload: &Value) -> Value {
        if !self.is_active() {
            return payload.clone();
        }

        debug!(
            fields = %self.fields,
            strict = self.projector.is_strict(),
            "Slicing response payload"
        );
        self.projector.project_value(payload, &self.fields)
    }

    /// Sends a serializable payload with `200 OK`.
    pub fn json<T: Serialize>(&self, payload: T) -> SlicedJson {
        match serde_json::to_value(payload) {
            Ok(value) => self.json_with(value),
            Err(err) => SlicedJson(Err(err.into())),
        }
    }

    /// Sends a payload in any of the supported call shapes.
    pub fn json_with(&self, shape: impl Into<Shape>) -> SlicedJson {
        let shape = shape.into().map_payload(|payload| self.slice(&payload));
        SlicedJson(Ok(shape))
    }

    /// Sends a payload given as up to two positional JSON arguments, one of
    /// which may be the status code.
    pub fn json_from_args(&self, first: Value, second: Option<Value>) -> SlicedJson {
        match Shape::from_args(first, second) {
            Ok(shape) => self.json_with(shape),
            Err(err) => SlicedJson(Err(err)),
        }
    }

    /// Wraps a response-sending function so that every payload it sends is
    /// projected first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use axum::http::StatusCode;
    /// use serde_json::{Value, json};
    /// use slicer::{FieldSpec, Projector, Shape, Slicer};
    ///
    /// let slicer = Slicer::new(Projector::strict(), FieldSpec::parse("email"));
    /// let send = slicer.entangle(|status: StatusCode, body: Value| (status, body));
    ///
    /// let (status, body) = send(Shape::from((
    ///     json!({"firstName": "A", "email": "a@x"}),
    ///     StatusCode::CREATED,
    /// )));
    /// assert_eq!(status, StatusCode::CREATED);
    /// assert_eq!(body, json!({"email": "a@x"}));
    /// ```
    pub fn entangle<F, R>(self, send: F) -> impl FnOnce(Shape) -> R
    where
        F: FnOnce(StatusCode, Value) -> R,
    {
        move |shape| {
            let (status, payload) = shape.into_parts();
            send(status, self.slice(&payload))
        }
    }
}

impl<S> FromRequestParts<S> for Slicer
where
    Projector: FromRef<S>,
    FieldsParam: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequestedFields(fields) = RequestedFields::from_request_parts(parts, state).await?;
        Ok(Slicer::new(Projector::from_ref(state), fields))
    }
}

/// A projected JSON response.
#[derive(Debug)]
pub struct SlicedJson(pub SlicerResult<Shape>);

impl SlicedJson {
    /// Returns the response status, if the response was built.
    pub fn status(&self) -> Option<StatusCode> {
        self.0.as_ref().ok().map(Shape::status)
    }

    /// Returns the projected payload, if the response was built.
    pub fn payload(&self) -> Option<&Value> {
        self.0.as_ref().ok().map(Shape::payload)
    }
}

impl IntoResponse for SlicedJson {
    fn into_response(self) -> Response {
        match self.0 {
            Ok(shape) => {
                let (status, payload) = shape.into_parts();
                (status, Json(payload)).into_response()
            }
            Err(err) => err.into_response(),
        }
    }
}
