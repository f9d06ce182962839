//! Router-level response slicing.
//!
//! [`slice_json_response`] intercepts the JSON response of any handler it
//! wraps and projects the body to the requested fields. Handlers behind it
//! keep returning plain `Json` and know nothing about projection.
//!
//! Responses are left untouched when:
//! - no fields were requested
//! - the status is not a success
//! - the content type is not JSON
//! - the body size is unknown or above `max_body_size`
//! - the body does not parse as JSON

use axum::{
    body::{Body, HttpBody},
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SlicerError;
use crate::middleware::fields::RequestedFields;
use crate::state::AppState;

/// Middleware projecting JSON response bodies to the requested fields.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::get};
///
/// let app = Router::new()
///     .route("/raw/persons", get(list_persons_raw))
///     .route_layer(middleware::from_fn_with_state(state.clone(), slice_json_response))
///     .with_state(state);
/// ```
pub async fn slice_json_response(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let fields = RequestedFields::from_query(request.uri().query(), state.fields_param());
    if fields.is_empty() {
        return next.run(request).await;
    }

    let response = next.run(request).await;
    if !response.status().is_success() || !is_json(response.headers()) {
        return response;
    }

    let limit = state.config().max_body_size;
    let (mut parts, body) = response.into_parts();

    match body.size_hint().upper() {
        Some(size) if size <= limit as u64 => {}
        size => {
            warn!(
                size = ?size,
                limit = limit,
                "Response body size unknown or too large, skipping projection"
            );
            return Response::from_parts(parts, body);
        }
    }

    let bytes = match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "Failed to buffer response body");
            return buffering_failed(err).into_response();
        }
    };

    let payload: Value = match serde_json::from_slice(&bytes) {
        Ok(payload) => payload,
        Err(err) => {
            debug!(error = %err, "Response body is not JSON, skipping projection");
            return Response::from_parts(parts, Body::from(bytes));
        }
    };

    debug!(
        fields = %fields,
        strict = state.projector().is_strict(),
        "Slicing intercepted response"
    );
    let sliced = state.projector().project_value(&payload, &fields);

    let body = match serde_json::to_vec(&sliced) {
        Ok(body) => body,
        Err(err) => return SlicerError::from(err).into_response(),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(body))
}

/// Maps a failure while reading a body that already passed the size check.
fn buffering_failed(err: axum::Error) -> SlicerError {
    SlicerError::Internal {
        message: format!("failed to buffer response body: {}", err),
    }
}

/// Returns true for `application/json` and any `+json` media type.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .is_some_and(|mime| {
            mime.type_() == mime::APPLICATION
                && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(&headers("application/json")));
        assert!(is_json(&headers("application/json; charset=utf-8")));
        assert!(is_json(&headers("application/fhir+json")));
        assert!(is_json(&headers("application/problem+json")));
    }

    #[test]
    fn test_buffering_failure_is_internal_error() {
        let err = buffering_failed(axum::Error::new("connection reset"));

        assert!(matches!(err, SlicerError::Internal { .. }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_is_not_json() {
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&headers("application/xml")));
        assert!(!is_json(&HeaderMap::new()));
    }
}
