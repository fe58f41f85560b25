//! Game core error types.

use reeldle_models::InvalidOptions;
use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Generator parameters fail the full-period (Hull-Dobell) conditions.
    #[error("Invalid generator parameters: {0}")]
    InvalidParameters(String),

    /// A guess-option threshold is zero or negative.
    #[error(transparent)]
    InvalidOptions(#[from] InvalidOptions),

    /// Candidate pool length does not equal the generator modulus.
    #[error("Candidate pool has {actual} entries, expected {expected}")]
    PoolSizeMismatch { expected: u64, actual: usize },

    /// A movie record's year is not a well-formed integer string.
    #[error("Unparseable year: {0:?}")]
    YearParse(String),
}

impl GameError {
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}
