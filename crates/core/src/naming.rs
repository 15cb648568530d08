//! Deterministic formatter for generated identifiers and display names.
//!
//! Every function here is a pure function of its arguments: identical inputs
//! always produce byte-identical output.

use crate::codec::trailing_chars;

/// Prefix of every generated playlist ID.
pub const PLAYLIST_ID_PREFIX: &str = "mockPlaylistId";

/// Prefix of every generated playlist name.
pub const PLAYLIST_NAME_PREFIX: &str = "Mock Playlist ";

/// Owner persona used by search results.
pub const SEARCH_USER_PREFIX: &str = "User";

/// Owner-ID persona used by the playlist detail view.
pub const DETAIL_OWNER_PREFIX: &str = "detail_owner";

/// Owner-name persona used by the playlist detail view.
pub const MOCK_OWNER_PREFIX: &str = "mockOwner";

/// Owner persona used by followed playlists.
pub const FOLLOWED_USER_PREFIX: &str = "followed";

/// Build a playlist ID from a catalog index, zero-padded to three digits.
///
/// ```
/// use spotify_mock_core::naming::playlist_id;
///
/// assert_eq!(playlist_id(7), "mockPlaylistId007");
/// assert_eq!(playlist_id(999), "mockPlaylistId999");
/// ```
pub fn playlist_id(index: usize) -> String {
    format!("{PLAYLIST_ID_PREFIX}{index:03}")
}

/// Build a playlist name from the last three characters of its ID.
///
/// IDs shorter than three characters are used whole.
pub fn playlist_name(id: &str) -> String {
    format!("{PLAYLIST_NAME_PREFIX}{}", trailing_chars(id, 3))
}

/// `{prefix}_user_id_{index}`
pub fn user_id(prefix: &str, index: impl std::fmt::Display) -> String {
    format!("{prefix}_user_id_{index}")
}

/// `{prefix} User {index}`
pub fn user_name(prefix: &str, index: impl std::fmt::Display) -> String {
    format!("{prefix} User {index}")
}

// ---------------------------------------------------------------------------
// URL helpers
// ---------------------------------------------------------------------------

/// Public web URL of a catalog object, e.g. `https://open.spotify.com/track/{id}`.
pub fn open_url(kind: &str, id: &str) -> String {
    format!("https://open.spotify.com/{kind}/{id}")
}

/// API URL of a catalog object, e.g. `https://api.spotify.com/v1/tracks/{id}`.
pub fn api_href(collection: &str, id: &str) -> String {
    format!("https://api.spotify.com/v1/{collection}/{id}")
}

/// URI of a catalog object, e.g. `spotify:track:{id}`.
pub fn uri(kind: &str, id: &str) -> String {
    format!("spotify:{kind}:{id}")
}

/// Placeholder cover image keyed by a numeric seed.
pub fn image_url(seed: impl std::fmt::Display) -> String {
    format!("https://picsum.photos/seed/{seed}/64/64")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_id_is_zero_padded() {
        assert_eq!(playlist_id(1), "mockPlaylistId001");
        assert_eq!(playlist_id(42), "mockPlaylistId042");
        assert_eq!(playlist_id(999), "mockPlaylistId999");
    }

    #[test]
    fn playlist_id_wider_than_three_digits_is_not_truncated() {
        assert_eq!(playlist_id(1234), "mockPlaylistId1234");
    }

    #[test]
    fn playlist_name_uses_id_suffix() {
        assert_eq!(playlist_name("mockPlaylistId001"), "Mock Playlist 001");
        assert_eq!(playlist_name("anything-xyz"), "Mock Playlist xyz");
    }

    #[test]
    fn playlist_name_of_short_id_uses_whole_id() {
        assert_eq!(playlist_name("7"), "Mock Playlist 7");
    }

    #[test]
    fn user_formatters() {
        assert_eq!(user_id("followed", 3), "followed_user_id_3");
        assert_eq!(user_name("User", 12), "User User 12");
        assert_eq!(user_id(DETAIL_OWNER_PREFIX, 7), "detail_owner_user_id_7");
        assert_eq!(user_name(MOCK_OWNER_PREFIX, 7), "mockOwner User 7");
    }

    #[test]
    fn formatters_are_deterministic() {
        assert_eq!(playlist_name("mockPlaylistId555"), playlist_name("mockPlaylistId555"));
        assert_eq!(user_id("x", 1), user_id("x", 1));
    }

    #[test]
    fn url_helpers() {
        assert_eq!(open_url("track", "t1"), "https://open.spotify.com/track/t1");
        assert_eq!(api_href("artists", "a1"), "https://api.spotify.com/v1/artists/a1");
        assert_eq!(uri("album", "b1"), "spotify:album:b1");
        assert_eq!(image_url(3), "https://picsum.photos/seed/3/64/64");
    }
}
