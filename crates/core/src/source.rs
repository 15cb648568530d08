//! Pluggable catalog backends.
//!
//! The HTTP layer talks to a [`CatalogSource`] trait object and does not know
//! whether records are generated in-process ([`GeneratedCatalog`]) or loaded
//! from pre-authored files ([`crate::fixtures::FixtureCatalog`]).

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::duration_cache::DurationCache;
use crate::error::CoreError;
use crate::types::{
    ArtistGenres, AudioFeatures, PlaylistDetail, PlaylistSummary, PlaylistTrack,
    RecommendedTrack, SearchResult,
};
use crate::{artist, playlist, track};

/// A catalog response body.
///
/// Generated records keep their types; fixture files are passed through as
/// raw JSON so that hand-written fields and shapes survive untouched. Both
/// serialize to the bare body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Generated(T),
    Fixture(serde_json::Value),
}

/// The seven catalog operations served by the mock API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short backend label, reported by the health endpoint.
    fn name(&self) -> &'static str;

    async fn search_playlists(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Payload<SearchResult>, CoreError>;

    async fn playlist_details(
        &self,
        playlist_id: &str,
    ) -> Result<Payload<PlaylistDetail>, CoreError>;

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> Result<Payload<Vec<PlaylistTrack>>, CoreError>;

    async fn followed_playlists(&self) -> Result<Payload<Vec<PlaylistSummary>>, CoreError>;

    async fn recommendations(&self) -> Result<Payload<Vec<RecommendedTrack>>, CoreError>;

    async fn audio_features(
        &self,
        track_ids: &[String],
    ) -> Result<Payload<Vec<AudioFeatures>>, CoreError>;

    async fn artist_genres(
        &self,
        artist_ids: &[String],
    ) -> Result<Payload<ArtistGenres>, CoreError>;
}

/// In-process generator backend. Never fails.
#[derive(Debug, Clone, Default)]
pub struct GeneratedCatalog {
    durations: Arc<DurationCache>,
}

impl GeneratedCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogSource for GeneratedCatalog {
    fn name(&self) -> &'static str {
        "generated"
    }

    async fn search_playlists(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Payload<SearchResult>, CoreError> {
        Ok(Payload::Generated(playlist::search(query, offset, limit)))
    }

    async fn playlist_details(
        &self,
        playlist_id: &str,
    ) -> Result<Payload<PlaylistDetail>, CoreError> {
        Ok(Payload::Generated(playlist::details(playlist_id)))
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> Result<Payload<Vec<PlaylistTrack>>, CoreError> {
        Ok(Payload::Generated(playlist::tracks(
            playlist_id,
            &self.durations,
            &mut rand::rng(),
        )))
    }

    async fn followed_playlists(&self) -> Result<Payload<Vec<PlaylistSummary>>, CoreError> {
        Ok(Payload::Generated(playlist::followed()))
    }

    async fn recommendations(&self) -> Result<Payload<Vec<RecommendedTrack>>, CoreError> {
        Ok(Payload::Generated(track::recommendations()))
    }

    async fn audio_features(
        &self,
        track_ids: &[String],
    ) -> Result<Payload<Vec<AudioFeatures>>, CoreError> {
        Ok(Payload::Generated(track::audio_features(
            track_ids,
            &mut rand::rng(),
        )))
    }

    async fn artist_genres(
        &self,
        artist_ids: &[String],
    ) -> Result<Payload<ArtistGenres>, CoreError> {
        Ok(Payload::Generated(artist::artist_genres(
            artist_ids,
            &mut rand::rng(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated<T: std::fmt::Debug>(payload: Payload<T>) -> T {
        match payload {
            Payload::Generated(value) => value,
            other => panic!("expected generated payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generated_catalog_serves_every_operation() {
        let catalog = GeneratedCatalog::new();

        let page = generated(catalog.search_playlists("q", 0, 20).await.unwrap());
        assert_eq!(page.playlists.len(), 20);
        assert_eq!(page.total, 999);

        let detail = generated(catalog.playlist_details("mockPlaylistId007").await.unwrap());
        assert_eq!(detail.tracks.total, 7);

        let tracks = generated(catalog.playlist_tracks("mockPlaylistId007").await.unwrap());
        assert_eq!(tracks.len(), 7);

        assert_eq!(generated(catalog.followed_playlists().await.unwrap()).len(), 8);
        assert_eq!(generated(catalog.recommendations().await.unwrap()).len(), 5);

        let ids = vec!["t1".to_string()];
        assert_eq!(generated(catalog.audio_features(&ids).await.unwrap()).len(), 1);
        assert_eq!(generated(catalog.artist_genres(&ids).await.unwrap()).len(), 1);
    }

    #[tokio::test]
    async fn playlist_track_durations_are_stable_across_calls() {
        let catalog = GeneratedCatalog::new();
        let first = catalog.playlist_tracks("mockPlaylistId012").await.unwrap();
        let second = catalog.playlist_tracks("mockPlaylistId012").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.durations.len(), 12);
    }

    #[tokio::test]
    async fn works_as_trait_object() {
        let source: Arc<dyn CatalogSource> = Arc::new(GeneratedCatalog::new());
        assert_eq!(source.name(), "generated");
        let page = generated(source.search_playlists("q", 999, 20).await.unwrap());
        assert!(page.playlists.is_empty());
    }

    #[test]
    fn payload_serializes_as_bare_body() {
        let generated = Payload::Generated(vec![1, 2]);
        let fixture: Payload<Vec<i32>> = Payload::Fixture(serde_json::json!({ "a": 1 }));
        assert_eq!(serde_json::to_string(&generated).unwrap(), "[1,2]");
        assert_eq!(serde_json::to_string(&fixture).unwrap(), r#"{"a":1}"#);
    }
}
