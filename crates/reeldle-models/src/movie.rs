//! Movie record models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable external identifier for a movie (the provider's numeric id).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    /// Get the inner numeric id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A credited person: name plus the role they are credited under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Person {
    pub name: String,
    pub role: String,
}

impl Person {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// A fully resolved movie record. Immutable once fetched for a given id.
///
/// `year` and `rating` keep the provider's string forms: the year is a
/// 4-digit string parsed at comparison time, and the rating is a US
/// certification string (`UNK` when the provider has none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Provider id
    pub id: MovieId,

    /// Display title
    pub title: String,

    /// Release year as a 4-digit string
    pub year: String,

    /// US certification (`G`, `PG`, `PG-13`, `R`, `NC-17`, or `UNK`)
    pub rating: String,

    /// Genre names, in the provider's order
    pub genres: Vec<String>,

    /// Credited cast, truncated to the configured limit
    pub cast: Vec<Person>,

    /// Backdrop image URL
    pub image_url: String,
}

impl Movie {
    /// Cast names only, roles dropped. This is the displayable form used
    /// in diff results.
    pub fn cast_names(&self) -> Vec<String> {
        self.cast.iter().map(|p| p.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: MovieId(603),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            rating: "R".to_string(),
            genres: vec!["Action".to_string(), "Science Fiction".to_string()],
            cast: vec![
                Person::new("Keanu Reeves", "Acting"),
                Person::new("Carrie-Anne Moss", "Acting"),
            ],
            image_url: "https://image.tmdb.org/t/p/original/matrix.jpg".to_string(),
        }
    }

    #[test]
    fn test_movie_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 603);
        assert_eq!(json["imageUrl"], "https://image.tmdb.org/t/p/original/matrix.jpg");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_movie_round_trips() {
        let movie = sample();
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }

    #[test]
    fn test_cast_names_drop_roles() {
        assert_eq!(
            sample().cast_names(),
            vec!["Keanu Reeves".to_string(), "Carrie-Anne Moss".to_string()]
        );
    }

    #[test]
    fn test_movie_id_transparent() {
        let id: MovieId = serde_json::from_str("603").unwrap();
        assert_eq!(id, MovieId(603));
        assert_eq!(serde_json::to_string(&id).unwrap(), "603");
    }
}
