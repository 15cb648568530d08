//! Record types returned by the generators.
//!
//! All records are built fresh per call and owned by the response that
//! embeds them. Keys serialize in `camelCase` to match the wire format of the
//! catalog API being mocked.

use indexmap::IndexMap;
use serde::Serialize;

/// Artist ID -> genre names, in first-insertion order.
pub type ArtistGenres = IndexMap<String, Vec<String>>;

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

/// `{ "spotify": url }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotifyUrl {
    pub spotify: String,
}

/// `{ "externalUrls": { "spotify": url } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUrls {
    pub external_urls: SpotifyUrl,
}

impl ExternalUrls {
    pub fn spotify(url: impl Into<String>) -> Self {
        Self {
            external_urls: SpotifyUrl {
                spotify: url.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// `{ "total": n }` -- the track count of a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackTotal {
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

/// Playlist owner. Which fields are present depends on the persona: search
/// results only carry a display name, followed playlists carry the full
/// user object, the detail view carries id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistOwner {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<ExternalUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// A playlist as it appears in search results and the followed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tracks: TrackTotal,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub owner: PlaylistOwner,
}

/// Paginated playlist search. `total` is always the full catalog size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub playlists: Vec<PlaylistSummary>,
    pub total: usize,
}

/// Single-playlist detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub playlist_name: String,
    pub owner: PlaylistOwner,
    pub tracks: TrackTotal,
}

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

/// Artist reference embedded in tracks and albums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStub {
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_type: String,
    pub artists: Vec<ArtistStub>,
    pub available_markets: Vec<String>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalIds {
    pub isrc: String,
}

/// A track inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistTrack {
    pub album: Album,
    pub artists: Vec<ArtistStub>,
    pub available_markets: Vec<String>,
    pub disc_number: u32,
    pub duration_ms: u32,
    pub explicit: bool,
    pub external_ids: ExternalIds,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub is_playable: bool,
    pub linked_from: Option<serde_json::Value>,
    pub restrictions: Option<serde_json::Value>,
    pub name: String,
    /// Signed on purpose: positions past 16 go below zero.
    pub popularity: i64,
    pub preview_url: String,
    pub track_number: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAlbum {
    pub name: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedArtist {
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTrack {
    pub id: String,
    pub name: String,
    pub duration_ms: u32,
    pub album: RecommendedAlbum,
    pub artists: Vec<RecommendedArtist>,
    pub external_urls: ExternalUrls,
    pub preview_url: String,
}

/// Audio analysis values for one track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: u8,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: u8,
    pub valence: f64,
    pub key: u8,
    pub duration_ms: u32,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn external_urls_nest_twice() {
        let urls = ExternalUrls::spotify("https://open.spotify.com/track/x");
        assert_eq!(
            serde_json::to_value(&urls).unwrap(),
            json!({ "externalUrls": { "spotify": "https://open.spotify.com/track/x" } })
        );
    }

    #[test]
    fn search_owner_serializes_display_name_only() {
        let owner = PlaylistOwner {
            display_name: "User User 1".into(),
            id: None,
            kind: None,
            external_urls: None,
            href: None,
            uri: None,
        };
        assert_eq!(
            serde_json::to_value(&owner).unwrap(),
            json!({ "displayName": "User User 1" })
        );
    }

    #[test]
    fn image_without_dimensions_omits_them() {
        let image = Image {
            height: None,
            url: "u".into(),
            width: None,
        };
        assert_eq!(serde_json::to_value(&image).unwrap(), json!({ "url": "u" }));
    }
}
