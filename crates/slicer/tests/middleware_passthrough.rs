//! Integration tests for the response-slicing middleware in front of
//! arbitrary handlers, plus the readiness check.
//!
//! Responses that are not successful JSON objects or arrays must come back
//! byte for byte; successful JSON keeps its status and gets sliced.

mod common;

use axum::{
    Json, Router,
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use axum_test::TestServer;
use serde_json::{Value, json};
use slicer::{AppState, SlicerConfig, middleware::slice_json_response};

use common::{create_test_server_with, test_persons};

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"a": 1, "b": 2})))
}

async fn text() -> &'static str {
    "a,b"
}

async fn scalar() -> Json<Value> {
    Json(json!(42))
}

async fn created() -> impl IntoResponse {
    (StatusCode::CREATED, Json(json!({"a": 1, "b": 2})))
}

async fn broken() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "not json")
}

fn create_sliced_server() -> TestServer {
    let state = AppState::with_persons(SlicerConfig::for_testing(), test_persons());
    let app = Router::new()
        .route("/missing", get(missing))
        .route("/text", get(text))
        .route("/scalar", get(scalar))
        .route("/created", get(created))
        .route("/broken", get(broken))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            slice_json_response,
        ))
        .with_state(state);

    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_error_status_passes_through() {
    let server = create_sliced_server();

    let response = server.get("/missing").add_query_param("fields", "a").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"a": 1, "b": 2}));
}

#[tokio::test]
async fn test_non_json_passes_through() {
    let server = create_sliced_server();

    let response = server.get("/text").add_query_param("fields", "a").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "a,b");
}

#[tokio::test]
async fn test_scalar_json_passes_through() {
    let server = create_sliced_server();

    let response = server.get("/scalar").add_query_param("fields", "a").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!(42));
}

#[tokio::test]
async fn test_unparseable_json_passes_through() {
    let server = create_sliced_server();

    let response = server.get("/broken").add_query_param("fields", "a").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "not json");
}

#[tokio::test]
async fn test_created_keeps_status_and_is_sliced() {
    let server = create_sliced_server();

    let response = server.get("/created").add_query_param("fields", "a").await;

    response.assert_status(StatusCode::CREATED);
    let body = response.text();
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"a": 1}));

    if let Some(length) = response.headers().get(header::CONTENT_LENGTH) {
        assert_eq!(length.to_str().unwrap(), body.len().to_string());
    }
}

#[tokio::test]
async fn test_without_fields_nothing_is_touched() {
    let server = create_sliced_server();

    let response = server.get("/created").await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), json!({"a": 1, "b": 2}));
}

#[tokio::test]
async fn test_readiness_ok() {
    let server = create_test_server_with(SlicerConfig::for_testing());

    let response = server.get("/_readiness").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["projection"], true);
    assert_eq!(body["checks"]["configuration"], true);
}

#[tokio::test]
async fn test_readiness_reports_bad_fields_param() {
    let server = create_test_server_with(SlicerConfig {
        fields_param: "a=b".to_string(),
        ..SlicerConfig::for_testing()
    });

    let response = server.get("/_readiness").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["status"], "not-ready");
    assert_eq!(body["checks"]["configuration"], false);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_health_reports_persons() {
    let server = create_test_server_with(SlicerConfig::for_testing());

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["persons"], 2);
    assert_eq!(body["fieldsParam"], "fields");
}
