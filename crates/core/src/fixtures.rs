//! File-backed catalog: serves pre-authored JSON instead of generated data.
//!
//! Each operation maps to one file in the fixture directory. Files are
//! returned as-is: any valid JSON is served, whatever its shape. Request
//! parameters are ignored and files are re-read on every call, so fixtures
//! can be edited while the server runs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::source::{CatalogSource, Payload};
use crate::types::{
    ArtistGenres, AudioFeatures, PlaylistDetail, PlaylistSummary, PlaylistTrack,
    RecommendedTrack, SearchResult,
};

pub const SEARCH_PLAYLISTS_FILE: &str = "search_playlists.json";
pub const PLAYLIST_DETAILS_FILE: &str = "playlist_details.json";
pub const PLAYLIST_TRACKS_FILE: &str = "playlist_tracks.json";
pub const FOLLOWED_PLAYLISTS_FILE: &str = "user_playlists.json";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.json";
pub const AUDIO_FEATURES_FILE: &str = "audio_features_tracks.json";
pub const ARTIST_GENRES_FILE: &str = "artist_genres.json";

/// Catalog backed by a directory of JSON fixtures.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    root: PathBuf,
}

impl FixtureCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read one fixture file as raw JSON.
    ///
    /// Only an unreadable file or invalid JSON becomes
    /// [`CoreError::FixtureUnavailable`].
    async fn load<T: Send>(&self, file: &str) -> Result<Payload<T>, CoreError> {
        let path = self.root.join(file);
        tracing::debug!(path = %path.display(), "Loading fixture");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| unavailable(&path, e))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| unavailable(&path, e))?;
        Ok(Payload::Fixture(value))
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> CoreError {
    CoreError::FixtureUnavailable {
        file: path.display().to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    fn name(&self) -> &'static str {
        "fixtures"
    }

    async fn search_playlists(
        &self,
        _query: &str,
        _offset: i64,
        _limit: i64,
    ) -> Result<Payload<SearchResult>, CoreError> {
        self.load(SEARCH_PLAYLISTS_FILE).await
    }

    async fn playlist_details(
        &self,
        _playlist_id: &str,
    ) -> Result<Payload<PlaylistDetail>, CoreError> {
        self.load(PLAYLIST_DETAILS_FILE).await
    }

    async fn playlist_tracks(
        &self,
        _playlist_id: &str,
    ) -> Result<Payload<Vec<PlaylistTrack>>, CoreError> {
        self.load(PLAYLIST_TRACKS_FILE).await
    }

    async fn followed_playlists(&self) -> Result<Payload<Vec<PlaylistSummary>>, CoreError> {
        self.load(FOLLOWED_PLAYLISTS_FILE).await
    }

    async fn recommendations(&self) -> Result<Payload<Vec<RecommendedTrack>>, CoreError> {
        self.load(RECOMMENDATIONS_FILE).await
    }

    async fn audio_features(
        &self,
        _track_ids: &[String],
    ) -> Result<Payload<Vec<AudioFeatures>>, CoreError> {
        self.load(AUDIO_FEATURES_FILE).await
    }

    async fn artist_genres(
        &self,
        _artist_ids: &[String],
    ) -> Result<Payload<ArtistGenres>, CoreError> {
        self.load(ARTIST_GENRES_FILE).await
    }
}
