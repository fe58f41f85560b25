//! Game orchestration: fetching and memoization around the pure core.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use reeldle_cache::{MemoPolicy, RedisCache};
use reeldle_game::DailySelector;
use reeldle_models::{DiffResult, GuessOptions, Movie, MovieId};
use reeldle_tmdb::{TmdbClient, TmdbError};

use crate::error::{ApiError, ApiResult};
use crate::metrics;

/// Orchestrates the daily selection and guess flows.
///
/// Every cache miss is recovered locally by recomputing from the provider
/// and repopulating; concurrent misses for the same key are not deduplicated
/// because the fetch is idempotent and re-derives the same result.
#[derive(Clone)]
pub struct GameService {
    cache: Arc<RedisCache>,
    tmdb: Arc<TmdbClient>,
    selector: Arc<DailySelector>,
    policy: MemoPolicy,
    options: GuessOptions,
}

impl GameService {
    pub fn new(
        cache: Arc<RedisCache>,
        tmdb: Arc<TmdbClient>,
        selector: Arc<DailySelector>,
        policy: MemoPolicy,
        options: GuessOptions,
    ) -> Self {
        Self {
            cache,
            tmdb,
            selector,
            policy,
            options,
        }
    }

    pub fn cache(&self) -> &RedisCache {
        &self.cache
    }

    pub fn tmdb(&self) -> &TmdbClient {
        &self.tmdb
    }

    /// The ranked candidate pool, rebuilt wholesale on cache miss.
    pub async fn candidate_pool(&self) -> ApiResult<Vec<MovieId>> {
        if let Some(pool) = self.policy.load_pool(&self.cache).await? {
            metrics::record_cache_hit("pool");
            return Ok(pool);
        }
        metrics::record_cache_miss("pool");

        let pool = self.tmdb.top_movies().await?;
        info!(size = pool.len(), "rebuilt candidate pool");
        self.policy.store_pool(&self.cache, &pool).await?;
        metrics::record_pool_rebuild();

        Ok(pool)
    }

    /// The movie of the day for a date.
    pub async fn movie_of_the_day(&self, date: NaiveDate) -> ApiResult<Movie> {
        if let Some(movie) = self.policy.load_media(&self.cache, date).await? {
            metrics::record_cache_hit("media");
            return Ok(movie);
        }
        metrics::record_cache_miss("media");

        let pool = self.candidate_pool().await?;
        let id = self.selector.select(date, &pool)?;
        debug!(date = %date, movie_id = %id, "resolved daily selection");

        // A pool id the provider no longer knows is a data problem on our
        // side, not the caller's
        let movie = self.tmdb.movie(id).await.map_err(|e| match e {
            TmdbError::NotFound(_) => {
                ApiError::config(format!("daily selection {id} missing at provider"))
            }
            other => ApiError::from(other),
        })?;

        self.policy.store_media(&self.cache, date, &movie).await?;
        metrics::record_daily_selection();

        Ok(movie)
    }

    /// A movie record by id, memoized across guesses.
    pub async fn movie(&self, id: MovieId) -> ApiResult<Movie> {
        if let Some(movie) = self.policy.load_movie(&self.cache, id).await? {
            metrics::record_cache_hit("movie");
            return Ok(movie);
        }
        metrics::record_cache_miss("movie");

        let movie = self.tmdb.movie(id).await?;
        self.policy.store_movie(&self.cache, &movie).await?;

        Ok(movie)
    }

    /// Diff a guessed movie against the date's target.
    pub async fn guess(&self, date: NaiveDate, id: MovieId) -> ApiResult<DiffResult> {
        if let Some(result) = self.policy.load_guess(&self.cache, date, id).await? {
            metrics::record_cache_hit("guess");
            return Ok(result);
        }
        metrics::record_cache_miss("guess");

        let target = self.movie_of_the_day(date).await?;
        let guessed = self.movie(id).await?;

        let result = reeldle_game::compare(&guessed, &target, &self.options)?;

        self.policy
            .store_guess(&self.cache, date, id, &result)
            .await?;
        metrics::record_guess(result.is_win());

        Ok(result)
    }
}
