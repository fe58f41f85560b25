//! Guess options: per-field yellow thresholds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A guess-option threshold was zero or negative.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid guess options: {field} must be strictly positive, got {value}")]
pub struct InvalidOptions {
    pub field: &'static str,
    pub value: i64,
}

/// Per-field yellow thresholds for the diff engine.
///
/// Every threshold must be strictly positive; a configuration with any
/// threshold <= 0 is rejected before use. The genre and cast thresholds are
/// carried for configuration parity even though the sequence classifier does
/// not currently consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessOptions {
    /// Max absolute year distance still classified yellow
    pub year_yellow_threshold: i64,

    /// Year distance beyond which the direction hint doubles (+-2)
    pub year_double_arrow_threshold: i64,

    /// Max absolute rating-ordinal distance still classified yellow
    pub rating_yellow_threshold: i64,

    /// Genre threshold (reserved)
    pub genre_yellow_threshold: i64,

    /// Cast threshold (reserved)
    pub cast_yellow_threshold: i64,
}

impl Default for GuessOptions {
    fn default() -> Self {
        Self {
            year_yellow_threshold: 5,
            year_double_arrow_threshold: 10,
            rating_yellow_threshold: 1,
            genre_yellow_threshold: 1,
            cast_yellow_threshold: 1,
        }
    }
}

impl GuessOptions {
    /// Validate that every threshold is strictly positive.
    pub fn validate(&self) -> Result<(), InvalidOptions> {
        let fields = [
            ("yearYellowThreshold", self.year_yellow_threshold),
            ("yearDoubleArrowThreshold", self.year_double_arrow_threshold),
            ("ratingYellowThreshold", self.rating_yellow_threshold),
            ("genreYellowThreshold", self.genre_yellow_threshold),
            ("castYellowThreshold", self.cast_yellow_threshold),
        ];

        for (field, value) in fields {
            if value <= 0 {
                return Err(InvalidOptions { field, value });
            }
        }

        Ok(())
    }
}
