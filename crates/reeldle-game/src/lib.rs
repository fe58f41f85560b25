//! Deterministic daily selection and guess diffing.
//!
//! This crate is the pure core of the Reeldle backend:
//! - A full-period linear congruential sequence generator
//! - The date -> movie-id daily selector built on it
//! - Field classifiers and the diff engine comparing a guess to the target
//!
//! Nothing here performs I/O or holds shared mutable state; every operation
//! is a pure function of its inputs and safe to call concurrently.

pub mod classify;
pub mod diff;
pub mod error;
pub mod selector;
pub mod sequence;

pub use classify::{classify_rating, classify_sequence, classify_year, rating_ordinal};
pub use diff::compare;
pub use error::{GameError, GameResult};
pub use selector::DailySelector;
pub use sequence::{SequenceGenerator, SequenceParams, SequenceStream};
