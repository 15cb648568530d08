//! Handlers for recommendations and audio features.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::list_param;
use crate::state::AppState;

/// GET /mock/recommendations
pub async fn recommendations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tracing::info!("Recommendations requested");
    let tracks = state.catalog.recommendations().await?;
    Ok(Json(tracks))
}

/// GET /mock/tracks/audio-features?trackIds=a,b
///
/// `trackIds` may be repeated or comma-separated. Values are freshly sampled
/// on every request.
pub async fn audio_features(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(pairs) = pairs?;
    let track_ids = list_param(&pairs, "trackIds")
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: trackIds".into()))?;
    tracing::info!(?track_ids, "Audio features requested");

    let features = state.catalog.audio_features(&track_ids).await?;
    Ok(Json(features))
}
