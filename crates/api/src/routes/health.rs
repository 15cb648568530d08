use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Reply body of `GET /ping`.
pub const PING_REPLY: &str = "pong from spotify-mock-api-server";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which catalog backend serves responses (`generated` or `fixtures`).
    pub backend: &'static str,
}

/// GET /ping -- plain-text liveness check.
async fn ping() -> &'static str {
    PING_REPLY
}

/// GET /health -- service status and active backend.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.catalog.name(),
    })
}

/// Mount liveness routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
}
