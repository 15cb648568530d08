//! Playlist generator: search catalog, detail view, track list and the
//! followed-playlists list.

use rand::Rng;

use crate::codec::digest;
use crate::duration_cache::DurationCache;
use crate::naming::{
    self, api_href, image_url, open_url, playlist_id, playlist_name, uri, user_id, user_name,
};
use crate::pagination::page_bounds;
use crate::types::{
    Album, ArtistStub, ExternalIds, ExternalUrls, Image, PlaylistDetail, PlaylistOwner,
    PlaylistSummary, PlaylistTrack, SearchResult, TrackTotal,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Size of the synthetic search catalog.
pub const TOTAL_PLAYLISTS: usize = 999;

/// Upper bound on the number of tracks in any playlist.
pub const MAX_TRACKS_PER_PLAYLIST: i64 = 50;

/// Number of playlists the current user follows.
pub const FOLLOWED_PLAYLISTS_COUNT: usize = 8;

/// Popularity of the first track; each later position loses [`POPULARITY_STEP`].
pub const BASE_POPULARITY: i64 = 80;
pub const POPULARITY_STEP: i64 = 5;

const PREVIEW_URL: &str = "https://via.placeholder.com/150";
const ALBUM_IMAGE_SIZE: u32 = 640;

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Track count of a playlist: its digest, capped at [`MAX_TRACKS_PER_PLAYLIST`].
pub fn track_count(playlist_id: &str) -> i64 {
    digest(playlist_id).min(MAX_TRACKS_PER_PLAYLIST)
}

/// Popularity of the track at 0-based `position`. Unclamped; goes negative
/// past position 16.
pub fn popularity_at(position: usize) -> i64 {
    BASE_POPULARITY - POPULARITY_STEP * position as i64
}

fn summary(index: usize, owner: PlaylistOwner, description: Option<String>) -> PlaylistSummary {
    let id = playlist_id(index);
    PlaylistSummary {
        name: playlist_name(&id),
        description,
        tracks: TrackTotal {
            total: track_count(&id),
        },
        images: vec![Image {
            height: None,
            url: image_url(index),
            width: None,
        }],
        external_urls: ExternalUrls::spotify(open_url("playlist", &id)),
        owner,
        id,
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Build the catalog entry at 1-based `index` as search returns it.
pub fn search_entry(index: usize) -> PlaylistSummary {
    let owner = PlaylistOwner {
        display_name: user_name(naming::SEARCH_USER_PREFIX, index),
        id: None,
        kind: None,
        external_urls: None,
        href: None,
        uri: None,
    };
    summary(index, owner, Some(format!("Search Playlist {index} Description")))
}

/// Page through the fixed playlist catalog.
///
/// `query` is accepted for interface fidelity but does not filter: every
/// query sees the same [`TOTAL_PLAYLISTS`] entries in index order.
pub fn search(query: &str, offset: i64, limit: i64) -> SearchResult {
    tracing::debug!(query, offset, limit, "Generating playlist search page");

    let (start, end) = page_bounds(offset, limit, TOTAL_PLAYLISTS);
    // Catalog indices are 1-based; slot `start` holds index `start + 1`.
    let playlists = (start..end).map(|slot| search_entry(slot + 1)).collect();

    SearchResult {
        playlists,
        total: TOTAL_PLAYLISTS,
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// Detail view of a single playlist.
///
/// The owner persona here (`detail_owner` / `mockOwner`) deliberately differs
/// from the one search uses for the same playlist.
pub fn details(playlist_id: &str) -> PlaylistDetail {
    let key = digest(playlist_id);
    PlaylistDetail {
        id: Some(playlist_id.to_string()),
        playlist_name: playlist_name(playlist_id),
        owner: PlaylistOwner {
            display_name: user_name(naming::MOCK_OWNER_PREFIX, key),
            id: Some(user_id(naming::DETAIL_OWNER_PREFIX, key)),
            kind: None,
            external_urls: None,
            href: None,
            uri: None,
        },
        tracks: TrackTotal {
            total: track_count(playlist_id),
        },
    }
}

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

fn artist_stub(n: usize) -> ArtistStub {
    let id = format!("artist_id_{n}");
    ArtistStub {
        external_urls: ExternalUrls::spotify(open_url("artist", &id)),
        href: api_href("artists", &id),
        name: format!("Artist {n}"),
        kind: "ARTIST".into(),
        uri: uri("artist", &id),
        id,
    }
}

fn album(n: usize) -> Album {
    let id = format!("album_id_{n}");
    Album {
        album_type: "ALBUM".into(),
        artists: vec![artist_stub(n)],
        available_markets: Vec::new(),
        external_urls: ExternalUrls::spotify(open_url("album", &id)),
        href: api_href("albums", &id),
        images: vec![Image {
            height: Some(ALBUM_IMAGE_SIZE),
            url: image_url(n),
            width: Some(ALBUM_IMAGE_SIZE),
        }],
        name: format!("Album {n}"),
        release_date: format!("2023-01-0{n}"),
        release_date_precision: "DAY".into(),
        kind: "ALBUM".into(),
        uri: uri("album", &id),
        id,
    }
}

/// Build the track at 0-based `position`, taking its duration from `durations`.
pub fn playlist_track<R: Rng>(
    position: usize,
    durations: &DurationCache,
    rng: &mut R,
) -> PlaylistTrack {
    let n = position + 1;
    let id = format!("track_id_{n}");
    PlaylistTrack {
        album: album(n),
        artists: vec![artist_stub(n)],
        available_markets: Vec::new(),
        disc_number: 1,
        duration_ms: durations.get_or_sample(&id, rng),
        explicit: false,
        external_ids: ExternalIds {
            isrc: format!("USUM7180000{n}"),
        },
        external_urls: ExternalUrls::spotify(open_url("track", &id)),
        href: api_href("tracks", &id),
        is_playable: true,
        linked_from: None,
        restrictions: None,
        name: format!("Track {n}"),
        popularity: popularity_at(position),
        preview_url: PREVIEW_URL.into(),
        track_number: n as u32,
        kind: "TRACK".into(),
        uri: uri("track", &id),
        id,
    }
}

/// Generate the track list of a playlist.
///
/// Produces `min(digest(playlist_id), 50)` tracks; a non-positive digest
/// yields an empty list.
pub fn tracks<R: Rng>(
    playlist_id: &str,
    durations: &DurationCache,
    rng: &mut R,
) -> Vec<PlaylistTrack> {
    let count = usize::try_from(track_count(playlist_id)).unwrap_or(0);
    tracing::debug!(playlist_id, count, "Generating playlist tracks");

    (0..count)
        .map(|position| playlist_track(position, durations, rng))
        .collect()
}

// ---------------------------------------------------------------------------
// Followed playlists
// ---------------------------------------------------------------------------

fn followed_owner(index: usize) -> PlaylistOwner {
    let id = user_id(naming::FOLLOWED_USER_PREFIX, index);
    PlaylistOwner {
        display_name: user_name(naming::FOLLOWED_USER_PREFIX, index),
        kind: Some("USER".into()),
        external_urls: Some(ExternalUrls::spotify(open_url("user", &id))),
        href: Some(api_href("users", &id)),
        uri: Some(uri("user", &id)),
        id: Some(id),
    }
}

/// The fixed list of [`FOLLOWED_PLAYLISTS_COUNT`] playlists the user follows.
pub fn followed() -> Vec<PlaylistSummary> {
    (1..=FOLLOWED_PLAYLISTS_COUNT)
        .map(|index| summary(index, followed_owner(index), None))
        .collect()
}
