//! TMDB REST API client.
//!
//! Implements the metadata-provider contract: ranked discovery pages for the
//! candidate pool and by-id movie resolution joining details, credits, and
//! release dates into one internal record. Response shapes are explicit
//! serde structs; the client performs no retries.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TmdbClient;
pub use config::TmdbConfig;
pub use error::{TmdbError, TmdbResult};
