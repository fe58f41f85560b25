//! Movie-of-the-day handler.

use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use reeldle_models::Movie;

use crate::error::ApiResult;
use crate::handlers::validate_game_path;
use crate::state::AppState;

/// `GET /api/v1/media/{media_type}/{date}`
pub async fn media_of_the_day(
    State(state): State<AppState>,
    Path((media_type, date)): Path<(String, String)>,
) -> ApiResult<Json<Movie>> {
    let date = validate_game_path(&state, &media_type, &date)?;

    let movie = state.game.movie_of_the_day(date).await?;
    info!(date = %date, movie_id = %movie.id, "served movie of the day");

    Ok(Json(movie))
}
