//! Call shapes of a JSON response.
//!
//! A response may be sent with a payload alone, or with a payload and a
//! status code in either order. The shape is resolved once, when the
//! response is built, so the rest of the adapter never inspects argument
//! types again.

use axum::http::StatusCode;
use serde_json::Value;

use crate::error::{SlicerError, SlicerResult};

/// The argument shape of a JSON response call.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// `json(payload)`, sent with `200 OK`.
    RecordOnly(Value),
    /// `json(payload, status)`.
    RecordThenStatus(Value, StatusCode),
    /// `json(status, payload)`.
    StatusThenRecord(StatusCode, Value),
}

impl Shape {
    /// Resolves the shape from up to two positional JSON arguments.
    ///
    /// With two arguments, whichever is a JSON number is the status code.
    /// The second position is checked first. When neither is a number the
    /// first argument is treated as the status and rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SlicerError::InvalidStatus`] when the status argument is
    /// not an integer in `100..=999`.
    pub fn from_args(first: Value, second: Option<Value>) -> SlicerResult<Self> {
        match second {
            None => Ok(Shape::RecordOnly(first)),
            Some(second) if second.is_number() => {
                let status = parse_status(&second)?;
                Ok(Shape::RecordThenStatus(first, status))
            }
            Some(second) => {
                let status = parse_status(&first)?;
                Ok(Shape::StatusThenRecord(status, second))
            }
        }
    }

    /// Returns the status code this shape will be sent with.
    pub fn status(&self) -> StatusCode {
        match self {
            Shape::RecordOnly(_) => StatusCode::OK,
            Shape::RecordThenStatus(_, status) | Shape::StatusThenRecord(status, _) => *status,
        }
    }

    /// Returns the payload.
    pub fn payload(&self) -> &Value {
        match self {
            Shape::RecordOnly(payload)
            | Shape::RecordThenStatus(payload, _)
            | Shape::StatusThenRecord(_, payload) => payload,
        }
    }

    /// Splits the shape into status and payload.
    pub fn into_parts(self) -> (StatusCode, Value) {
        match self {
            Shape::RecordOnly(payload) => (StatusCode::OK, payload),
            Shape::RecordThenStatus(payload, status) | Shape::StatusThenRecord(status, payload) => {
                (status, payload)
            }
        }
    }

    /// Rebuilds the same shape around a different payload.
    pub fn map_payload<F>(self, f: F) -> Self
    where
        F: FnOnce(Value) -> Value,
    {
        match self {
            Shape::RecordOnly(payload) => Shape::RecordOnly(f(payload)),
            Shape::RecordThenStatus(payload, status) => Shape::RecordThenStatus(f(payload), status),
            Shape::StatusThenRecord(status, payload) => Shape::StatusThenRecord(status, f(payload)),
        }
    }
}

fn parse_status(value: &Value) -> SlicerResult<StatusCode> {
    value
        .as_u64()
        .and_then(|code| u16::try_from(code).ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| SlicerError::InvalidStatus {
            value: value.to_string(),
        })
}

impl From<Value> for Shape {
    fn from(payload: Value) -> Self {
        Shape::RecordOnly(payload)
    }
}

impl From<(Value, StatusCode)> for Shape {
    fn from((payload, status): (Value, StatusCode)) -> Self {
        Shape::RecordThenStatus(payload, status)
    }
}

impl From<(StatusCode, Value)> for Shape {
    fn from((status, payload): (StatusCode, Value)) -> Self {
        Shape::StatusThenRecord(status, payload)
    }
}
