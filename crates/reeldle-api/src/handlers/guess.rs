//! Guess handler.

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use reeldle_models::{DiffResult, MovieId};

use crate::error::{ApiError, ApiResult};
use crate::handlers::validate_game_path;
use crate::state::AppState;

/// `GET /api/v1/guess/{media_type}/{date}/{id}`
pub async fn guess(
    State(state): State<AppState>,
    Path((media_type, date, id)): Path<(String, String, String)>,
) -> ApiResult<Json<DiffResult>> {
    let date = validate_game_path(&state, &media_type, &date)?;

    let id: MovieId = id
        .parse::<u64>()
        .map(MovieId)
        .map_err(|_| ApiError::validation(format!("invalid movie id {id:?}, expected an integer")))?;

    let result = state.game.guess(date, id).await?;
    info!(date = %date, guess_id = %id, win = result.is_win(), "served guess diff");

    Ok(Json(result))
}
