//! Request handlers.

pub mod guess;
pub mod health;
pub mod media;

pub use health::{health, ready};

use chrono::{NaiveDate, Utc};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate the shared `{media_type}/{date}` path segments.
///
/// Only `movie` is accepted; the date must be `YYYY-MM-DD` and must not lie
/// after "today" in the configured game timezone.
pub(crate) fn validate_game_path(
    state: &AppState,
    media_type: &str,
    date: &str,
) -> ApiResult<NaiveDate> {
    if media_type != "movie" {
        return Err(ApiError::validation(format!(
            "unsupported media type {media_type:?}, currently accepted values: 'movie'"
        )));
    }

    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| ApiError::validation(format!("invalid date {date:?}, expected YYYY-MM-DD")))?;

    let today = Utc::now().with_timezone(&state.game_config.timezone).date_naive();
    if parsed > today {
        return Err(ApiError::not_found(format!(
            "no puzzle for future date {parsed}, today is {today}"
        )));
    }

    Ok(parsed)
}
