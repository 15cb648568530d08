use std::sync::Arc;

use spotify_mock_core::fixtures::FixtureCatalog;
use spotify_mock_core::source::{CatalogSource, GeneratedCatalog};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Backend that produces every mock response.
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    /// Build state for `config`, picking the fixture backend when
    /// `mock_data_path` is set and the generator otherwise.
    pub fn from_config(config: &ServerConfig) -> Self {
        let catalog: Arc<dyn CatalogSource> = match &config.mock_data_path {
            Some(path) => Arc::new(FixtureCatalog::new(path)),
            None => Arc::new(GeneratedCatalog::new()),
        };
        Self { catalog }
    }
}
