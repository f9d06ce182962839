//! # slicer - Partial JSON Responses
//!
//! This crate lets clients of a JSON API ask for a subset of fields:
//!
//! ```text
//! GET /persons?fields=firstName,lastName
//! ```
//!
//! returns every person with only `firstName` and `lastName`.
//!
//! ## Projection Rules
//!
//! The [`Projector`] decides, per record, which fields survive:
//!
//! | Requested fields present | strict (default) | lenient |
//! |--------------------------|------------------|---------|
//! | all | only those fields | only those fields |
//! | some | record dropped | only the present fields |
//! | none | record dropped | whole record |
//!
//! Responses keep their shape: an array stays an array (possibly empty), a
//! single object stays an object (`{}` when it was dropped). Without a
//! `fields` parameter nothing is filtered.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use slicer::{SlicerConfig, create_app};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SlicerConfig::default();
//!     let app = create_app(config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Using It In Handlers
//!
//! Either extract a [`Slicer`] and send through it:
//!
//! ```rust,ignore
//! async fn list(State(state): State<AppState>, slicer: Slicer) -> SlicedJson {
//!     slicer.json_with((StatusCode::OK, state.persons_value()))
//! }
//! ```
//!
//! or mount [`middleware::slice_json_response`] in front of handlers that
//! return plain `Json`.
//!
//! ## Architecture
//!
//! - [`projector`] - The projection algorithm
//! - [`fields`] - Requested field list parsing
//! - [`sliceable`] - Record vs. sequence views
//! - [`adapter`] - Call shapes, envelope reconstruction, the [`Slicer`] extractor
//! - [`middleware`] - Field extraction and response interception
//! - [`config`] - Server configuration
//! - [`error`] - Error types
//! - [`state`] - Application state
//! - [`handlers`] - Demo person directory and health checks
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod fields;
pub mod handlers;
pub mod middleware;
pub mod projector;
pub mod routing;
pub mod sliceable;
pub mod state;

// Re-export commonly used types
pub use adapter::{Shape, SlicedJson, Slicer};
pub use config::SlicerConfig;
pub use error::{SlicerError, SlicerResult};
pub use fields::FieldSpec;
pub use projector::{Extraction, Projector, ProjectorConfig, extract_fields};
pub use sliceable::{Cardinality, Record, Sliceable};
pub use state::AppState;

use axum::{Router, http::HeaderValue};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the Axum application serving the demo person directory.
///
/// # Example
///
/// ```rust,ignore
/// use slicer::{SlicerConfig, create_app};
///
/// let app = create_app(SlicerConfig {
///     strict: false,
///     ..Default::default()
/// });
/// ```
pub fn create_app(config: SlicerConfig) -> Router {
    create_app_with_state(AppState::new(config))
}

/// Creates the Axum application around an existing state.
pub fn create_app_with_state(state: AppState) -> Router {
    let config = state.config().clone();

    info!(
        strict = config.strict,
        fields_param = %config.fields_param,
        "Creating slicer server"
    );

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// Origins that do not parse as header values are skipped with a warning.
fn build_cors_layer(config: &SlicerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let mut origins = Vec::new();
    for origin in config.cors_origins.split(',').map(str::trim) {
        if origin.is_empty() {
            continue;
        }
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warn!(origin = origin, "Ignoring invalid CORS origin"),
        }
    }
    cors.allow_origin(origins)
}

/// Environment variable overriding the log filter directives.
pub const LOG_FILTER_ENV: &str = "SLICER_LOG";

/// Returns the filter directives used when `SLICER_LOG` is not set.
///
/// The level applies to the library, the server binary and the HTTP trace
/// layer alike.
pub fn default_log_filter(level: &str) -> String {
    format!(
        "slicer={level},slicer_server={level},tower_http={level}",
        level = level
    )
}

/// Initializes the tracing subscriber for logging.
///
/// Directives come from `SLICER_LOG` when set, otherwise from
/// [`default_log_filter`]. Call once at startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_covers_crates() {
        assert_eq!(
            default_log_filter("debug"),
            "slicer=debug,slicer_server=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_default_log_filter_parses() {
        use tracing_subscriber::EnvFilter;

        assert!(EnvFilter::try_new(default_log_filter("warn")).is_ok());
    }
}
