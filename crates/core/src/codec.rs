//! Identifier codec.
//!
//! Turns an opaque identifier into a small integer ("digest") so that
//! generated attributes vary per ID but stay reproducible for the same ID.

/// Number of trailing characters that make up the digest.
const DIGEST_WIDTH: usize = 3;

/// Derive the digest of an identifier.
///
/// - IDs with at least three characters: the last three characters parsed
///   as a base-10 integer.
/// - Shorter IDs: the whole string parsed as a base-10 integer.
/// - Anything that does not parse yields `0`. The failure is logged and
///   never surfaced to the caller.
///
/// # Examples
///
/// ```
/// use spotify_mock_core::codec::digest;
///
/// assert_eq!(digest("mockPlaylistId007"), 7);
/// assert_eq!(digest("42"), 42);
/// assert_eq!(digest("abc"), 0);
/// ```
pub fn digest(id: &str) -> i64 {
    let tail = trailing_chars(id, DIGEST_WIDTH);
    match tail.parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(id, error = %err, "Identifier has no numeric suffix, using digest 0");
            0
        }
    }
}

/// Return the last `n` characters of `s`, or all of `s` if it is shorter.
///
/// Counts characters rather than bytes so multi-byte identifiers never split
/// a code point.
pub(crate) fn trailing_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let skip = count - n;
    let (start, _) = s
        .char_indices()
        .nth(skip)
        .unwrap_or((s.len(), ' '));
    &s[start..]
}
