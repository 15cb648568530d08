//! Process-wide memo of per-track durations.
//!
//! The first request for a track ID samples a duration; every later request
//! for the same ID returns that value until the process exits.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::{PoisonError, RwLock};

use rand::Rng;

/// Valid range for sampled track durations, in milliseconds.
pub const DURATION_MS_RANGE: Range<u32> = 100_000..300_000;

/// Read-mostly map from track ID to its memoized duration.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Entries are never evicted.
#[derive(Debug, Default)]
pub struct DurationCache {
    durations: RwLock<HashMap<String, u32>>,
}

impl DurationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized duration for `track_id`, sampling one with `rng`
    /// on first use.
    pub fn get_or_sample<R: Rng>(&self, track_id: &str, rng: &mut R) -> u32 {
        if let Some(ms) = self
            .durations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(track_id)
        {
            return *ms;
        }

        let mut durations = self
            .durations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have won the race between the two locks.
        *durations
            .entry(track_id.to_string())
            .or_insert_with(|| rng.random_range(DURATION_MS_RANGE))
    }

    /// Number of memoized track IDs.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.durations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
