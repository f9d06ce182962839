//! Server configuration for the slicer demo server.
//!
//! Supports both programmatic configuration and environment variable
//! overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SLICER_PORT` | 8080 | Server port |
//! | `SLICER_HOST` | 127.0.0.1 | Host to bind |
//! | `SLICER_LOG_LEVEL` | info | Log level |
//! | `SLICER_LOG` | - | Full `tracing` filter directives, overrides the level |
//! | `SLICER_STRICT` | true | Drop records missing any requested field |
//! | `SLICER_FIELDS_PARAM` | fields | Query parameter holding the field list |
//! | `SLICER_MAX_BODY_SIZE` | 10485760 | Max buffered response body (bytes) |
//! | `SLICER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SLICER_ENABLE_CORS` | true | Enable CORS |
//! | `SLICER_CORS_ORIGINS` | * | Allowed origins |
//!
//! # Example
//!
//! ```rust
//! use slicer::SlicerConfig;
//!
//! // Create from environment
//! let config = SlicerConfig::from_env();
//!
//! // Or create programmatically
//! let config = SlicerConfig {
//!     port: 3000,
//!     strict: false,
//!     ..Default::default()
//! };
//! ```

use clap::{ArgAction, Parser};

use crate::projector::ProjectorConfig;

/// Default name of the query parameter carrying the field list.
pub const DEFAULT_FIELDS_PARAM: &str = "fields";

/// Configuration for the slicer server.
///
/// Can be constructed from environment variables using
/// [`SlicerConfig::from_env`], from command line arguments using
/// [`SlicerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "slicer-server")]
#[command(about = "Partial JSON response demo server")]
pub struct SlicerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SLICER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SLICER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SLICER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Drop records that miss any requested field.
    #[arg(
        long,
        env = "SLICER_STRICT",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub strict: bool,

    /// Query parameter holding the comma-separated field list.
    #[arg(long, env = "SLICER_FIELDS_PARAM", default_value = DEFAULT_FIELDS_PARAM)]
    pub fields_param: String,

    /// Maximum response body size in bytes that the middleware will buffer.
    #[arg(long, env = "SLICER_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "SLICER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(
        long,
        env = "SLICER_ENABLE_CORS",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SLICER_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            strict: true,
            fields_param: DEFAULT_FIELDS_PARAM.to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
        }
    }
}

impl SlicerConfig {
    /// Creates a new SlicerConfig from environment variables.
    ///
    /// Falls back to defaults when parsing fails.
    pub fn from_env() -> Self {
        Self::try_parse_from(["slicer-server"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the projector configuration.
    pub fn projector_config(&self) -> ProjectorConfig {
        ProjectorConfig {
            strict: self.strict,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if let Err(more) = self.validate_request_handling() {
            errors.extend(more);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates only the settings that shape request handling.
    ///
    /// Used by the readiness check, where the listener is already bound.
    pub fn validate_request_handling(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        let param = self.fields_param.trim();
        if param.is_empty() {
            errors.push("Fields parameter name cannot be empty".to_string());
        } else if param.contains(['&', '=', '?', '#']) {
            errors.push(format!(
                "Fields parameter name '{}' contains reserved characters",
                param
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            ..Default::default()
        }
    }
}
