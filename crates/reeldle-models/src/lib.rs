//! Shared data models for the Reeldle backend.
//!
//! This crate provides Serde-serializable types for:
//! - Movie records and their stable identifiers
//! - Guess options (per-field yellow thresholds)
//! - Per-field diff results returned to a guess

pub mod diff;
pub mod movie;
pub mod options;

// Re-export common types
pub use diff::{Color, DiffResult, FieldDiff, FieldKey};
pub use movie::{Movie, MovieId, Person};
pub use options::{GuessOptions, InvalidOptions};
