//! TMDB error types.

use thiserror::Error;

pub type TmdbResult<T> = Result<T, TmdbError>;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Page {0} exceeds the configured page limit")]
    PageLimitExceeded(usize),

    #[error("Discovery exhausted the page limit with {got} of {needed} candidates")]
    InsufficientResults { needed: usize, got: usize },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TmdbError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }
}
