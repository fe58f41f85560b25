//! Memoization policy: cache keys and TTLs.
//!
//! The candidate pool lives under the long-TTL `topMovies` key so every date
//! resolution in its validity window uses the identical pool and thus the
//! identical permutation mapping. Resolved movie records and diff results
//! use short-TTL `reeldle:`-namespaced keys.

use chrono::NaiveDate;

use reeldle_models::{DiffResult, Movie, MovieId};

use crate::client::RedisCache;
use crate::error::CacheResult;

/// Key for the ranked candidate pool.
pub const POOL_KEY: &str = "topMovies";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Key for the resolved target movie of a date.
pub fn media_key(date: NaiveDate) -> String {
    format!("reeldle:media:{}", date.format(DATE_FORMAT))
}

/// Key for a resolved movie record by id.
pub fn movie_key(id: MovieId) -> String {
    format!("reeldle:movie:{id}")
}

/// Key for a computed diff result.
pub fn guess_key(date: NaiveDate, id: MovieId) -> String {
    format!("reeldle:guess:{}:{id}", date.format(DATE_FORMAT))
}

/// TTL pair for the two cache tiers.
#[derive(Debug, Clone, Copy)]
pub struct MemoPolicy {
    /// Candidate pool TTL in seconds (long)
    pub pool_ttl_secs: u64,
    /// Resolved records and diff results TTL in seconds (short)
    pub result_ttl_secs: u64,
}

impl Default for MemoPolicy {
    fn default() -> Self {
        Self {
            pool_ttl_secs: 7 * 24 * 3600,
            result_ttl_secs: 24 * 3600,
        }
    }
}

impl MemoPolicy {
    /// Create policy from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pool_ttl_secs: std::env::var("CACHE_POOL_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.pool_ttl_secs),
            result_ttl_secs: std::env::var("CACHE_RESULT_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.result_ttl_secs),
        }
    }

    /// Load the cached candidate pool.
    pub async fn load_pool(&self, cache: &RedisCache) -> CacheResult<Option<Vec<MovieId>>> {
        cache.get_json(POOL_KEY).await
    }

    /// Store the candidate pool verbatim.
    pub async fn store_pool(&self, cache: &RedisCache, pool: &[MovieId]) -> CacheResult<()> {
        cache.set_json(POOL_KEY, &pool, self.pool_ttl_secs).await
    }

    /// Load the resolved target movie for a date.
    pub async fn load_media(
        &self,
        cache: &RedisCache,
        date: NaiveDate,
    ) -> CacheResult<Option<Movie>> {
        cache.get_json(&media_key(date)).await
    }

    /// Store the resolved target movie for a date.
    pub async fn store_media(
        &self,
        cache: &RedisCache,
        date: NaiveDate,
        movie: &Movie,
    ) -> CacheResult<()> {
        cache
            .set_json(&media_key(date), movie, self.result_ttl_secs)
            .await
    }

    /// Load a resolved movie record by id.
    pub async fn load_movie(
        &self,
        cache: &RedisCache,
        id: MovieId,
    ) -> CacheResult<Option<Movie>> {
        cache.get_json(&movie_key(id)).await
    }

    /// Store a resolved movie record by id.
    pub async fn store_movie(&self, cache: &RedisCache, movie: &Movie) -> CacheResult<()> {
        cache
            .set_json(&movie_key(movie.id), movie, self.result_ttl_secs)
            .await
    }

    /// Load a computed diff result.
    pub async fn load_guess(
        &self,
        cache: &RedisCache,
        date: NaiveDate,
        id: MovieId,
    ) -> CacheResult<Option<DiffResult>> {
        cache.get_json(&guess_key(date, id)).await
    }

    /// Store a computed diff result.
    pub async fn store_guess(
        &self,
        cache: &RedisCache,
        date: NaiveDate,
        id: MovieId,
        result: &DiffResult,
    ) -> CacheResult<()> {
        cache
            .set_json(&guess_key(date, id), result, self.result_ttl_secs)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_key_shapes() {
        assert_eq!(media_key(date()), "reeldle:media:2024-01-05");
        assert_eq!(movie_key(MovieId(603)), "reeldle:movie:603");
        assert_eq!(guess_key(date(), MovieId(603)), "reeldle:guess:2024-01-05:603");
    }

    #[test]
    fn test_pool_key_pinned() {
        // External contract: the pool key is exactly "topMovies"
        assert_eq!(POOL_KEY, "topMovies");
    }

    #[test]
    fn test_env_defaults() {
        let policy = MemoPolicy::default();
        assert_eq!(policy.pool_ttl_secs, 604_800);
        assert_eq!(policy.result_ttl_secs, 86_400);
    }
}
