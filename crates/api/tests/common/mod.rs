#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use spotify_mock_api::config::ServerConfig;
use spotify_mock_api::router::build_app_router;
use spotify_mock_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the generated backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        mock_data_path: None,
    }
}

/// Build the full application router backed by the generator.
///
/// Uses the same [`build_app_router`] as `main.rs` so tests exercise the
/// production middleware stack.
pub fn build_test_app() -> Router {
    let config = test_config();
    build_app_router(AppState::from_config(&config), &config)
}

/// Build the application router backed by fixture files under `dir`.
pub fn build_fixture_app(dir: &Path) -> Router {
    let config = ServerConfig {
        mock_data_path: Some(dir.to_path_buf()),
        ..test_config()
    };
    build_app_router(AppState::from_config(&config), &config)
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
