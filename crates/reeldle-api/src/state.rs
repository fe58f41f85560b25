//! Application state.

use std::sync::Arc;

use reeldle_cache::{MemoPolicy, RedisCache};
use reeldle_game::DailySelector;
use reeldle_tmdb::TmdbClient;

use crate::config::{ApiConfig, GameConfig};
use crate::services::GameService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub game_config: GameConfig,
    pub game: GameService,
}

impl AppState {
    /// Create new application state, validating the game configuration once.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let game_config = GameConfig::from_env()?;

        let selector = DailySelector::new(game_config.sequence)?;
        game_config.options.validate()?;

        let cache = RedisCache::from_env()?;
        let tmdb = TmdbClient::from_env()?;

        // The pool length is fixed by selection_count; it must equal the
        // generator modulus or selection can never be in range.
        let selection_count = tmdb.config().selection_count as u64;
        if selection_count != selector.modulus() {
            return Err(format!(
                "TMDB_SELECTION_COUNT ({selection_count}) must equal GAME_MODULUS ({})",
                selector.modulus()
            )
            .into());
        }

        let game = GameService::new(
            Arc::new(cache),
            Arc::new(tmdb),
            Arc::new(selector),
            MemoPolicy::from_env(),
            game_config.options,
        );

        Ok(Self {
            config,
            game_config,
            game,
        })
    }
}
