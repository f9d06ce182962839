//! Route configuration.
//!
//! Maps HTTP paths to handlers.

use axum::{Router, middleware, routing::get};

use crate::handlers;
use crate::middleware::slice_json_response;
use crate::state::AppState;

/// Creates all routes.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness check
/// - `GET /_readiness` - Readiness check
/// - `GET /persons` - Person list, sliced by the handler
/// - `GET /persons/{id}` - One person, sliced by the handler
/// - `GET /raw/persons` - Person list, sliced by middleware
pub fn create_routes(state: AppState) -> Router {
    let intercepted = Router::new()
        .route("/raw/persons", get(handlers::list_persons_raw_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            slice_json_response,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler))
        .route("/persons", get(handlers::list_persons_handler))
        .route("/persons/{id}", get(handlers::read_person_handler))
        .merge(intercepted)
        .with_state(state)
}
