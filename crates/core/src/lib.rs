//! Synthetic data derivation engine for the mock music-catalog API.
//!
//! Every record is computed on demand from the identifier or index that the
//! caller supplies. Nothing is persisted; the only process-wide state is the
//! per-track duration memo in [`duration_cache`].

pub mod artist;
pub mod codec;
pub mod duration_cache;
pub mod error;
pub mod fixtures;
pub mod naming;
pub mod pagination;
pub mod playlist;
pub mod source;
pub mod track;
pub mod types;
