//! Common test utilities for slicer integration tests.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use slicer::{AppState, SlicerConfig, create_app_with_state};

/// Person records used across tests.
pub fn test_persons() -> Vec<(String, Value)> {
    vec![
        (
            "1".to_string(),
            json!({"firstName": "A", "lastName": "B", "email": "a@x"}),
        ),
        ("2".to_string(), json!({"firstName": "C", "email": "c@x"})),
    ]
}

/// Creates a test server with the given projector mode.
pub fn create_test_server(strict: bool) -> TestServer {
    create_test_server_with(SlicerConfig {
        strict,
        ..SlicerConfig::for_testing()
    })
}

/// Creates a test server from a configuration.
pub fn create_test_server_with(config: SlicerConfig) -> TestServer {
    let state = AppState::with_persons(config, test_persons());
    let app = create_app_with_state(state);
    TestServer::new(app).expect("Failed to create test server")
}
