//! TMDB REST client.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use reeldle_models::{Movie, MovieId, Person};

use crate::config::TmdbConfig;
use crate::error::{TmdbError, TmdbResult};
use crate::types::{CreditsResponse, DiscoverResponse, MovieDetails, ReleaseDatesResponse};

/// Rating string used when the provider has no US certification.
const UNKNOWN_RATING: &str = "UNK";

/// TMDB v3 REST client.
///
/// Owns its pooled HTTP client; performs no retries. Request failures map to
/// a distinct not-found vs. request-failure taxonomy so callers can decide
/// on retry policy.
pub struct TmdbClient {
    http: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Create a new client.
    pub fn new(config: TmdbConfig) -> TmdbResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("reeldle-tmdb/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TmdbError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> TmdbResult<Self> {
        Self::new(TmdbConfig::from_env()?)
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> TmdbResult<T> {
        let url = format!("{}{path}", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(TmdbError::not_found(path.to_string())),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                warn!(path = %path, status = %status, "TMDB request failed");
                Err(TmdbError::request_failed(format!(
                    "{path} returned {status}: {body}"
                )))
            }
            _ => Ok(response.json().await?),
        }
    }

    /// Fetch one ranked discovery page as ordered (id, title) pairs.
    ///
    /// Pages beyond the configured limit are rejected client-side.
    pub async fn discover_page(&self, page: usize) -> TmdbResult<Vec<(MovieId, String)>> {
        if page == 0 || page > self.config.page_limit {
            return Err(TmdbError::PageLimitExceeded(page));
        }

        let mut query = self.config.discover_params.clone();
        query.push(("page".to_string(), page.to_string()));

        debug!(page = page, "requesting discovery page");
        let response: DiscoverResponse = self.get_json("/discover/movie", &query).await?;

        Ok(response
            .results
            .into_iter()
            .map(|m| (MovieId(m.id), m.title))
            .collect())
    }

    /// Accumulate discovery pages into the ranked candidate pool.
    ///
    /// Stops once `selection_count` ids are collected; exhausting the page
    /// limit first is surfaced as an insufficient-data error, never silently
    /// tolerated.
    pub async fn top_movies(&self) -> TmdbResult<Vec<MovieId>> {
        let needed = self.config.selection_count;
        let mut movies = Vec::with_capacity(needed);

        for page in 1..=self.config.page_limit {
            for (id, _) in self.discover_page(page).await? {
                if movies.len() == needed {
                    break;
                }
                movies.push(id);
            }

            if movies.len() == needed {
                return Ok(movies);
            }
        }

        Err(TmdbError::InsufficientResults {
            needed,
            got: movies.len(),
        })
    }

    /// Resolve a full movie record: details + credits + release dates.
    pub async fn movie(&self, id: MovieId) -> TmdbResult<Movie> {
        let details: MovieDetails = self.get_json(&format!("/movie/{id}"), &[]).await?;
        let credits: CreditsResponse =
            self.get_json(&format!("/movie/{id}/credits"), &[]).await?;
        let releases: ReleaseDatesResponse = self
            .get_json(&format!("/movie/{id}/release_dates"), &[])
            .await?;

        let year = details
            .release_date
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string();

        let genres = details.genres.into_iter().map(|g| g.name).collect();

        let cast = credits
            .cast
            .into_iter()
            .take(self.config.cast_limit)
            .map(|member| Person::new(member.name, member.known_for_department))
            .collect();

        let rating = us_certification(&releases).unwrap_or_else(|| UNKNOWN_RATING.to_string());

        let image_url = details
            .backdrop_path
            .map(|path| format!("{}{path}", self.config.image_base_url))
            .unwrap_or_default();

        Ok(Movie {
            id: MovieId(details.id),
            title: details.title,
            year,
            rating,
            genres,
            cast,
            image_url,
        })
    }
}

/// First non-empty US certification, if any.
fn us_certification(releases: &ReleaseDatesResponse) -> Option<String> {
    releases
        .results
        .iter()
        .filter(|country| country.iso_3166_1 == "US")
        .flat_map(|country| country.release_dates.iter())
        .map(|r| r.certification.trim())
        .find(|c| !c.is_empty())
        .map(|c| c.to_string())
}
