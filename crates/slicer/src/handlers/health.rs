//! Health check endpoint handlers.
//!
//! `/health` reports the projector mode and what the server is serving,
//! `/_readiness` runs the projector once over a fixed record and checks the
//! configuration before the server takes traffic.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::fields::FieldSpec;
use crate::projector::Projector;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler(State(state): State<AppState>) -> Response {
    debug!("Processing health check request");

    let health_response = json!({
        "status": "healthy",
        "strict": state.projector().is_strict(),
        "fieldsParam": state.fields_param(),
        "persons": state.persons().count(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (StatusCode::OK, Json(health_response)).into_response()
}

/// Handler for the liveness check.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness check.
///
/// Ready means the configuration validates and the projector slices a
/// known record the way its mode says it should. Otherwise 503 with the
/// collected errors.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler(State(state): State<AppState>) -> Response {
    debug!("Processing readiness check request");

    let config_errors = state.config().validate_request_handling().err().unwrap_or_default();
    let config_ok = config_errors.is_empty();
    let mut errors = config_errors;
    let projection_ok = projection_self_check(state.projector());
    if !projection_ok {
        errors.push("Projector self-check produced an unexpected result".to_string());
    }

    let checks = json!({
        "configuration": config_ok,
        "projection": projection_ok,
        "fieldsParam": state.fields_param(),
        "maxBodySize": state.config().max_body_size
    });

    if errors.is_empty() {
        let response = json!({ "status": "ready", "checks": checks });
        (StatusCode::OK, Json(response)).into_response()
    } else {
        warn!(errors = ?errors, "Readiness check failed");
        let response = json!({ "status": "not-ready", "checks": checks, "errors": errors });
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

/// Projects a fixed record once and compares against the expected outcome
/// for the projector's mode.
fn projection_self_check(projector: &Projector) -> bool {
    let record = json!({"id": 1, "name": "ready"});

    let present = projector.project_value(&record, &FieldSpec::parse("id"));
    let partial = projector.project_value(&record, &FieldSpec::parse("id,missing"));
    let expected_partial: Value = if projector.is_strict() {
        json!({})
    } else {
        json!({"id": 1})
    };

    present == json!({"id": 1}) && partial == expected_partial
}
