//! API and game configuration.

use chrono_tz::Tz;
use thiserror::Error;

use reeldle_game::SequenceParams;
use reeldle_models::GuessOptions;

/// A configuration value failed to parse or validate at startup.
#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(pub String);

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 64 * 1024, // 64KB, the API is GET-only
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64 * 1024),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

/// Game configuration: generator parameters, timezone, and thresholds.
///
/// The generator parameters themselves are validated by the selector at
/// construction; this only parses them out of the environment.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Sequence generator parameters
    pub sequence: SequenceParams,
    /// Timezone that defines "today" for future-date refusal
    pub timezone: Tz,
    /// Per-field diff thresholds
    pub options: GuessOptions,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // m = 500 = 2^2 * 5^3; a - 1 = 20 covers both prime factors and
            // the divisible-by-4 condition; 33 is coprime to 500.
            sequence: SequenceParams {
                modulus: 500,
                multiplier: 21,
                increment: 33,
                seed: 7,
            },
            timezone: chrono_tz::America::New_York,
            options: GuessOptions::default(),
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timezone = match std::env::var("GAME_TIMEZONE") {
            Ok(name) => name
                .parse()
                .map_err(|_| ConfigError(format!("unknown timezone {name:?}")))?,
            Err(_) => defaults.timezone,
        };

        Ok(Self {
            sequence: SequenceParams {
                modulus: env_u64("GAME_MODULUS", defaults.sequence.modulus),
                multiplier: env_u64("GAME_MULTIPLIER", defaults.sequence.multiplier),
                increment: env_u64("GAME_INCREMENT", defaults.sequence.increment),
                seed: env_u64("GAME_SEED", defaults.sequence.seed),
            },
            timezone,
            options: GuessOptions {
                year_yellow_threshold: env_i64(
                    "YEAR_YELLOW_THRESHOLD",
                    defaults.options.year_yellow_threshold,
                ),
                year_double_arrow_threshold: env_i64(
                    "YEAR_DOUBLE_ARROW_THRESHOLD",
                    defaults.options.year_double_arrow_threshold,
                ),
                rating_yellow_threshold: env_i64(
                    "RATING_YELLOW_THRESHOLD",
                    defaults.options.rating_yellow_threshold,
                ),
                genre_yellow_threshold: env_i64(
                    "GENRE_YELLOW_THRESHOLD",
                    defaults.options.genre_yellow_threshold,
                ),
                cast_yellow_threshold: env_i64(
                    "CAST_YELLOW_THRESHOLD",
                    defaults.options.cast_yellow_threshold,
                ),
            },
        })
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_i64(name: &str, default: i64) -> i64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
