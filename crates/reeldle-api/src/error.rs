//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use reeldle_cache::CacheError;
use reeldle_game::GameError;
use reeldle_tmdb::TmdbError;

use crate::config::ConfigError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Provider error: {0}")]
    Tmdb(#[from] TmdbError),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(ConfigError(msg.into()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Configuration errors are ours, never the caller's
            ApiError::Config(_) | ApiError::Game(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Collaborator failures, distinguishable for retry policy
            ApiError::Cache(_) => StatusCode::BAD_GATEWAY,
            ApiError::Tmdb(e) => match e {
                TmdbError::NotFound(_) => StatusCode::NOT_FOUND,
                TmdbError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let detail = match &self {
            ApiError::Validation(_) | ApiError::NotFound(_) => self.to_string(),
            _ => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
        };

        let body = ErrorResponse { detail };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("bad date").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::not_found("future date").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(GameError::invalid_parameters("bad lcg")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(TmdbError::not_found("/movie/999")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(TmdbError::InsufficientResults { needed: 500, got: 3 }).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
