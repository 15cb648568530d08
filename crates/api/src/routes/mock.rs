//! Route definitions for the mock catalog, mounted at `/mock`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{artist, playlist, track};
use crate::state::AppState;

/// Catalog routes mounted at `/mock`.
///
/// ```text
/// GET /search/playlists          -> playlist::search
/// GET /playlists/{id}            -> playlist::details
/// GET /playlists/{id}/tracks     -> playlist::tracks
/// GET /following/playlists       -> playlist::followed
/// GET /artists/genres            -> artist::genres
/// GET /recommendations           -> track::recommendations
/// GET /tracks/audio-features     -> track::audio_features
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search/playlists", get(playlist::search))
        .route("/playlists/{id}", get(playlist::details))
        .route("/playlists/{id}/tracks", get(playlist::tracks))
        .route("/following/playlists", get(playlist::followed))
        .route("/artists/genres", get(artist::genres))
        .route("/recommendations", get(track::recommendations))
        .route("/tracks/audio-features", get(track::audio_features))
}
