//! Axum HTTP API server.
//!
//! This crate provides:
//! - Movie-of-the-day and guess endpoints
//! - Request validation (media type, date, id, future-date refusal)
//! - Prometheus metrics and health/readiness probes

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{ApiConfig, GameConfig};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::GameService;
pub use state::AppState;
