//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for playlist search.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Query parameters for `GET /mock/search/playlists`.
///
/// `query` is required; `offset`/`limit` default to `0`/`20`. Out-of-range
/// values are clamped by the generator rather than rejected.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

/// Collect every value of a list parameter.
///
/// Accepts both repeated keys (`?ids=a&ids=b`) and comma-separated values
/// (`?ids=a,b`); blank items are dropped. Returns `None` when the key is
/// absent altogether.
pub fn list_param(pairs: &[(String, String)], key: &str) -> Option<Vec<String>> {
    let mut found = false;
    let mut values = Vec::new();
    for (k, v) in pairs {
        if k != key {
            continue;
        }
        found = true;
        values.extend(
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    found.then_some(values)
}
