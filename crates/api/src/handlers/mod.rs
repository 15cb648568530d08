//! Request handlers for the `/mock` catalog endpoints.
//!
//! Each submodule parses request parameters, delegates to the configured
//! [`CatalogSource`](spotify_mock_core::source::CatalogSource) and returns the
//! record verbatim as JSON. Errors map through [`AppError`](crate::error::AppError).

pub mod artist;
pub mod playlist;
pub mod track;
