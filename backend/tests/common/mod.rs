use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use portfolio_backend::{config::Settings, create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Settings for tests; built directly so tests never depend on process env
pub fn test_settings(seed_mock_data: bool) -> Settings {
    Settings {
        bind_address: "127.0.0.1".to_string(),
        port: 4000,
        cors_allow_origins: vec!["*".to_string()],
        log_level: "error".to_string(),
        log_format: "plain".to_string(),
        seed_mock_data,
    }
}

/// Create a test application over the seeded mock dataset
pub fn create_test_app() -> Router {
    create_router(AppState::new(test_settings(true)))
}

/// Create a test application over an empty store
#[allow(dead_code)]
pub fn create_empty_test_app() -> Router {
    create_router(AppState::new(test_settings(false)))
}

/// Helper to extract response body as bytes
pub async fn extract_body(response: axum::response::Response) -> Vec<u8> {
    use axum::body::to_bytes;
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    body.to_vec()
}

/// Send a request and return status plus parsed JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (axum::http::StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = extract_body(response).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
