use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::list_param;
use crate::state::AppState;

/// GET /mock/artists/genres?artistIds=a,b
///
/// Returns an object keyed by artist ID. Duplicate IDs collapse to one key.
pub async fn genres(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(pairs) = pairs?;
    let artist_ids = list_param(&pairs, "artistIds")
        .ok_or_else(|| AppError::BadRequest("Missing required parameter: artistIds".into()))?;
    tracing::info!(?artist_ids, "Artist genres requested");

    let genres = state.catalog.artist_genres(&artist_ids).await?;
    Ok(Json(genres))
}
