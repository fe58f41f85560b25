//! Typed adapters for TMDB response shapes.
//!
//! One explicit serde struct per endpoint shape; adaptation to the internal
//! `Movie` record happens in the client, not by reflective field lookup.

use serde::Deserialize;

/// `GET /discover/movie` response.
#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<DiscoverMovie>,
}

/// One ranked discovery entry.
#[derive(Debug, Deserialize)]
pub struct DiscoverMovie {
    pub id: u64,
    pub title: String,
}

/// `GET /movie/{id}` response, trimmed to the fields we adapt.
#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    /// `YYYY-MM-DD`, possibly empty for unreleased titles
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// `GET /movie/{id}/credits` response.
#[derive(Debug, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub known_for_department: String,
}

/// `GET /movie/{id}/release_dates` response.
#[derive(Debug, Deserialize)]
pub struct ReleaseDatesResponse {
    #[serde(default)]
    pub results: Vec<CountryReleases>,
}

#[derive(Debug, Deserialize)]
pub struct CountryReleases {
    /// ISO 3166-1 country code
    pub iso_3166_1: String,
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseDate {
    #[serde(default)]
    pub certification: String,
}
