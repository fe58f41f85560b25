//! TMDB client configuration.

use std::time::Duration;

use crate::error::{TmdbError, TmdbResult};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
const DEFAULT_DISCOVER_PARAMS: &str = "sort_by=popularity.desc,vote_count.gte=3000";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key (v3 auth)
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Image base URL for backdrops
    pub image_base_url: String,
    /// Candidate pool size; must equal the selector modulus
    pub selection_count: usize,
    /// Max discovery pages to fetch per pool build
    pub page_limit: usize,
    /// Cast entries kept per movie record
    pub cast_limit: usize,
    /// Extra query params for ranked discovery, as (key, value) pairs
    pub discover_params: Vec<(String, String)>,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl TmdbConfig {
    /// Create config from environment variables. `TMDB_API_KEY` is required.
    pub fn from_env() -> TmdbResult<Self> {
        let api_key = std::env::var("TMDB_API_KEY")
            .map_err(|_| TmdbError::config("TMDB_API_KEY must be set"))?;
        if api_key.is_empty() {
            return Err(TmdbError::config("TMDB_API_KEY cannot be empty"));
        }

        let discover_raw = std::env::var("TMDB_DISCOVER_PARAMS")
            .unwrap_or_else(|_| DEFAULT_DISCOVER_PARAMS.to_string());

        Ok(Self {
            api_key,
            base_url: std::env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            image_base_url: std::env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.to_string()),
            selection_count: std::env::var("TMDB_SELECTION_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
            page_limit: std::env::var("TMDB_PAGE_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),
            cast_limit: std::env::var("TMDB_CAST_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            discover_params: parse_discover_params(&discover_raw)?,
            timeout: Duration::from_secs(
                std::env::var("TMDB_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("TMDB_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        })
    }
}

/// Parse `key=value,key=value` discover params.
fn parse_discover_params(raw: &str) -> TmdbResult<Vec<(String, String)>> {
    raw.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .ok_or_else(|| {
                    TmdbError::config(format!("malformed discover param {pair:?}, expected key=value"))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_discover_params() {
        let params = parse_discover_params("sort_by=popularity.desc, vote_count.gte=3000").unwrap();
        assert_eq!(
            params,
            vec![
                ("sort_by".to_string(), "popularity.desc".to_string()),
                ("vote_count.gte".to_string(), "3000".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_discover_params_rejects_malformed() {
        assert!(parse_discover_params("sort_by").is_err());
    }

    #[test]
    fn test_parse_discover_params_empty() {
        assert!(parse_discover_params("").unwrap().is_empty());
    }
}
