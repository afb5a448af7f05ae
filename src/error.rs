//! Error types for the search view.

use thiserror::Error;

/// Why a search request failed.
///
/// The view collapses every variant into one user-facing message; the
/// variants only exist so the cause can be traced.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
    /// Connection refused, reset, DNS failure and the like.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err)
        } else {
            SearchError::Transport(err)
        }
    }
}

/// Errors raised while building a [`crate::config::ViewConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported endpoint scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}
