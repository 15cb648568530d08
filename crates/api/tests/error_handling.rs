//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use spotify_mock_api::error::AppError;
use spotify_mock_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn fixture_unavailable_returns_500_without_leaking_path() {
    let err = AppError::Core(CoreError::FixtureUnavailable {
        file: "/srv/secret/recommendations.json".into(),
        reason: "No such file or directory".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "FIXTURE_UNAVAILABLE");
    assert!(!json["error"].as_str().unwrap().contains("/srv/secret"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Missing required parameter: trackIds".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Missing required parameter: trackIds");
}

#[tokio::test]
async fn query_rejection_becomes_json_bad_request() {
    use axum::extract::Query;
    use axum::http::Request;

    #[derive(Debug, serde::Deserialize)]
    struct Params {
        #[allow(dead_code)]
        limit: i64,
    }

    let req = Request::builder()
        .uri("/mock/search/playlists?limit=ten")
        .body(())
        .unwrap();
    let rejection = Query::<Params>::try_from_uri(req.uri()).unwrap_err();

    let (status, json) = error_to_response(AppError::from(rejection)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("limit"));
}
