//! Handlers for playlist search, detail, tracks and the followed list.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use spotify_mock_core::source::Payload;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// GET /mock/search/playlists?query=&offset=0&limit=20
///
/// Page through the synthetic playlist catalog. `query` is required but does
/// not filter results. A missing `query` or non-numeric `offset`/`limit` is a
/// JSON `BAD_REQUEST`.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    tracing::info!(
        query = %params.query,
        offset = params.offset,
        limit = params.limit,
        "Playlist search requested",
    );

    let result = state
        .catalog
        .search_playlists(&params.query, params.offset, params.limit)
        .await?;

    if let Payload::Generated(page) = &result {
        tracing::debug!(
            returned = page.playlists.len(),
            total = page.total,
            "Playlist search page built",
        );
    }
    Ok(Json(result))
}

/// GET /mock/playlists/{id}
pub async fn details(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%playlist_id, "Playlist details requested");
    let detail = state.catalog.playlist_details(&playlist_id).await?;
    Ok(Json(detail))
}

/// GET /mock/playlists/{id}/tracks
pub async fn tracks(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(%playlist_id, "Playlist tracks requested");
    let tracks = state.catalog.playlist_tracks(&playlist_id).await?;
    Ok(Json(tracks))
}

/// GET /mock/following/playlists
pub async fn followed(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tracing::info!("Followed playlists requested");
    let playlists = state.catalog.followed_playlists().await?;
    Ok(Json(playlists))
}
