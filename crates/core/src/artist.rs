//! Artist generator: genre assignment per artist ID.

use rand::Rng;

use crate::types::ArtistGenres;

/// Fixed genre vocabulary.
pub const GENRES: [&str; 10] = [
    "Rock",
    "Pop",
    "Jazz",
    "Hip Hop",
    "Electronic",
    "Classical",
    "Country",
    "Blues",
    "Reggae",
    "Metal",
];

/// Inclusive bounds on the number of genres per artist.
pub const MIN_GENRES: usize = 1;
pub const MAX_GENRES: usize = 3;

/// Draw budget per artist. Collisions are retried until either enough
/// unique genres are collected or the budget runs out.
const MAX_DRAW_ATTEMPTS: usize = 32;

/// Draw between [`MIN_GENRES`] and [`MAX_GENRES`] unique genres, in the
/// order they were first drawn.
pub fn sample_genres<R: Rng>(rng: &mut R) -> Vec<String> {
    let wanted = rng.random_range(MIN_GENRES..=MAX_GENRES);
    let mut genres: Vec<String> = Vec::with_capacity(wanted);

    for _ in 0..MAX_DRAW_ATTEMPTS {
        if genres.len() == wanted {
            break;
        }
        let genre = GENRES[rng.random_range(0..GENRES.len())];
        if !genres.iter().any(|g| g == genre) {
            genres.push(genre.to_string());
        }
    }

    genres
}

/// Assign genres to each artist ID.
///
/// Duplicate IDs keep the position of their first occurrence but take the
/// genres of their last one.
pub fn artist_genres<R: Rng>(artist_ids: &[String], rng: &mut R) -> ArtistGenres {
    tracing::debug!(count = artist_ids.len(), "Assigning artist genres");
    let mut out = ArtistGenres::with_capacity(artist_ids.len());
    for id in artist_ids {
        out.insert(id.clone(), sample_genres(rng));
    }
    out
}
