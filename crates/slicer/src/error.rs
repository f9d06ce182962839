//! Error types for the slicer adapters and demo handlers.
//!
//! The projection itself never fails. Errors only arise where a response is
//! built around it: an unusable status code, a payload that cannot be
//! serialized, or a resource the demo handlers do not know.
//!
//! Every error renders as a JSON body:
//!
//! ```json
//! {"error": {"status": 404, "code": "not-found", "message": "..."}}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// The error type for slicer operations.
#[derive(Error, Debug)]
pub enum SlicerError {
    /// A status code argument was not a valid HTTP status.
    #[error("invalid status code: {value}")]
    InvalidStatus {
        /// The rejected value, rendered as JSON.
        value: String,
    },

    /// The response payload could not be converted to JSON.
    #[error("failed to serialize response payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The requested resource does not exist.
    #[error("resource not found: {resource}/{id}")]
    NotFound {
        /// The resource kind (e.g., "persons").
        resource: String,
        /// The requested ID.
        id: String,
    },

    /// Any other internal failure.
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

/// Result type for slicer operations.
pub type SlicerResult<T> = Result<T, SlicerError>;

impl SlicerError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SlicerError::NotFound { .. } => StatusCode::NOT_FOUND,
            SlicerError::InvalidStatus { .. }
            | SlicerError::Serialization(_)
            | SlicerError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SlicerError::InvalidStatus { .. } => "invalid-status",
            SlicerError::Serialization(_) => "serialization",
            SlicerError::NotFound { .. } => "not-found",
            SlicerError::Internal { .. } => "exception",
        }
    }
}

impl IntoResponse for SlicerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(code = self.code(), error = %self, "Request failed");
        }

        let body = json!({
            "error": {
                "status": status.as_u16(),
                "code": self.code(),
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = SlicerError::NotFound {
            resource: "persons".to_string(),
            id: "9".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not-found");
        assert_eq!(err.to_string(), "resource not found: persons/9");
    }

    #[test]
    fn test_invalid_status_is_server_error() {
        let err = SlicerError::InvalidStatus {
            value: "42".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let err = SlicerError::Internal {
            message: "boom".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
