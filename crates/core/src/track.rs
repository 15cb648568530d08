//! Track generator: recommendations and audio features.

use std::ops::Range;

use rand::Rng;

use crate::duration_cache::DURATION_MS_RANGE;
use crate::naming::{image_url, open_url};
use crate::types::{
    AudioFeatures, ExternalUrls, Image, RecommendedAlbum, RecommendedArtist, RecommendedTrack,
};

/// Number of recommended tracks.
pub const RECOMMENDATION_COUNT: usize = 5;

pub const RECOMMENDATION_TRACK_ID_PREFIX: &str = "recommendation_track_id_";
pub const RECOMMENDATION_TRACK_NAME_PREFIX: &str = "Recommendation Track ";
pub const RECOMMENDATION_ALBUM_ID_PREFIX: &str = "recommendation_album_id_";
pub const RECOMMENDATION_ALBUM_NAME_PREFIX: &str = "Recommendation Album ";
pub const RECOMMENDATION_ARTIST_ID_PREFIX: &str = "recommendation_artist_id_";
pub const RECOMMENDATION_ARTIST_NAME_PREFIX: &str = "Recommendation Artist ";
pub const AUDIO_FEATURES_ID_PREFIX: &str = "audio_features_";

const RECOMMENDATION_BASE_DURATION_MS: u32 = 200_000;
const RECOMMENDATION_DURATION_STEP_MS: u32 = 10_000;
const PREVIEW_URL: &str = "https://via.placeholder.com/150";

// Audio feature ranges (half-open unless noted).
pub const UNIT_RANGE: Range<f64> = 0.0..1.0;
pub const LOUDNESS_RANGE: Range<f64> = -60.0..0.0;
pub const TEMPO_RANGE: Range<f64> = 50.0..200.0;
pub const MODE_RANGE: Range<u8> = 0..2;
pub const TIME_SIGNATURE_RANGE: Range<u8> = 1..6;
pub const KEY_RANGE: Range<u8> = 0..12;

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

fn recommended_track(position: usize) -> RecommendedTrack {
    let n = position + 1;
    let track_id = format!("{RECOMMENDATION_TRACK_ID_PREFIX}{n}");
    let album_id = format!("{RECOMMENDATION_ALBUM_ID_PREFIX}{n}");
    let artist_id = format!("{RECOMMENDATION_ARTIST_ID_PREFIX}{n}");

    RecommendedTrack {
        name: format!("{RECOMMENDATION_TRACK_NAME_PREFIX}{n}"),
        duration_ms: RECOMMENDATION_BASE_DURATION_MS
            + RECOMMENDATION_DURATION_STEP_MS * position as u32,
        album: RecommendedAlbum {
            name: format!("{RECOMMENDATION_ALBUM_NAME_PREFIX}{n}"),
            images: vec![Image {
                height: None,
                url: image_url(n),
                width: None,
            }],
            external_urls: ExternalUrls::spotify(open_url("album", &album_id)),
        },
        artists: vec![RecommendedArtist {
            name: format!("{RECOMMENDATION_ARTIST_NAME_PREFIX}{n}"),
            external_urls: ExternalUrls::spotify(open_url("artist", &artist_id)),
        }],
        external_urls: ExternalUrls::spotify(open_url("track", &track_id)),
        preview_url: PREVIEW_URL.into(),
        id: track_id,
    }
}

/// The fixed recommendation list. Fully index-derived, so every call returns
/// identical output.
pub fn recommendations() -> Vec<RecommendedTrack> {
    (0..RECOMMENDATION_COUNT).map(recommended_track).collect()
}

// ---------------------------------------------------------------------------
// Audio features
// ---------------------------------------------------------------------------

/// Sample one audio-feature record for `track_id`.
pub fn sample_audio_features<R: Rng>(track_id: &str, rng: &mut R) -> AudioFeatures {
    AudioFeatures {
        acousticness: rng.random_range(UNIT_RANGE),
        danceability: rng.random_range(UNIT_RANGE),
        energy: rng.random_range(UNIT_RANGE),
        instrumentalness: rng.random_range(UNIT_RANGE),
        liveness: rng.random_range(UNIT_RANGE),
        loudness: rng.random_range(LOUDNESS_RANGE),
        mode: rng.random_range(MODE_RANGE),
        speechiness: rng.random_range(UNIT_RANGE),
        tempo: rng.random_range(TEMPO_RANGE),
        time_signature: rng.random_range(TIME_SIGNATURE_RANGE),
        valence: rng.random_range(UNIT_RANGE),
        key: rng.random_range(KEY_RANGE),
        duration_ms: rng.random_range(DURATION_MS_RANGE),
        id: format!("{AUDIO_FEATURES_ID_PREFIX}{track_id}"),
    }
}

/// Audio features for each requested track, in request order.
///
/// Values are sampled independently on every call; they are not memoized,
/// so repeated requests for the same ID may differ.
pub fn audio_features<R: Rng>(track_ids: &[String], rng: &mut R) -> Vec<AudioFeatures> {
    tracing::debug!(count = track_ids.len(), "Sampling audio features");
    track_ids
        .iter()
        .map(|id| sample_audio_features(id, rng))
        .collect()
}
