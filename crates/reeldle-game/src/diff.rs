//! The diff engine: compare a guessed movie against the target.

use std::collections::HashMap;

use reeldle_models::{DiffResult, FieldDiff, FieldKey, GuessOptions, Movie};

use crate::classify::{classify_rating, classify_sequence, classify_year};
use crate::error::{GameError, GameResult};

fn parse_year(year: &str) -> GameResult<i64> {
    year.trim()
        .parse()
        .map_err(|_| GameError::YearParse(year.to_string()))
}

/// Compare `guess` against `target` across all tracked fields.
///
/// Options are validated before any field is evaluated; an unparseable year
/// on either record fails the whole comparison. Pure and side-effect-free:
/// all fetching and caching happens around this call, never inside it.
pub fn compare(guess: &Movie, target: &Movie, options: &GuessOptions) -> GameResult<DiffResult> {
    options.validate()?;

    let guessed_year = parse_year(&guess.year)?;
    let target_year = parse_year(&target.year)?;

    let mut fields = HashMap::with_capacity(FieldKey::ALL.len());

    let (color, direction) = classify_year(
        guessed_year,
        target_year,
        options.year_yellow_threshold,
        options.year_double_arrow_threshold,
    );
    fields.insert(
        FieldKey::Year,
        FieldDiff::new(color, direction, vec![guess.year.clone()]),
    );

    let (color, direction) =
        classify_rating(&guess.rating, &target.rating, options.rating_yellow_threshold);
    fields.insert(
        FieldKey::Rating,
        FieldDiff::new(color, direction, vec![guess.rating.clone()]),
    );

    let (color, direction) = classify_sequence(&guess.genres, &target.genres);
    fields.insert(
        FieldKey::Genre,
        FieldDiff::new(color, direction, guess.genres.clone()),
    );

    let guessed_cast = guess.cast_names();
    let (color, direction) = classify_sequence(&guessed_cast, &target.cast_names());
    fields.insert(
        FieldKey::Cast,
        FieldDiff::new(color, direction, guessed_cast),
    );

    Ok(DiffResult::new(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reeldle_models::{Color, MovieId, Person};

    fn movie(id: u64, year: &str, rating: &str, genres: &[&str], cast: &[&str]) -> Movie {
        Movie {
            id: MovieId(id),
            title: format!("Movie {id}"),
            year: year.to_string(),
            rating: rating.to_string(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
            cast: cast.iter().map(|n| Person::new(*n, "Acting")).collect(),
            image_url: String::new(),
        }
    }

    fn target() -> Movie {
        movie(
            1,
            "2020",
            "R",
            &["Drama", "Action"],
            &["Alice Adams", "Bob Brown"],
        )
    }

    #[test]
    fn test_self_comparison_all_green() {
        let target = target();
        let result = compare(&target, &target, &GuessOptions::default()).unwrap();

        for key in FieldKey::ALL {
            let field = result.field(key).unwrap();
            assert_eq!(field.color, Color::Green, "field {key}");
            assert_eq!(field.direction, 0, "field {key}");
        }
        assert!(result.is_win());
    }

    #[test]
    fn test_all_four_fields_present() {
        let guess = movie(2, "2015", "PG-13", &["Comedy"], &["Carol Clark"]);
        let result = compare(&guess, &target(), &GuessOptions::default()).unwrap();
        assert_eq!(result.fields.len(), 4);
    }

    #[test]
    fn test_values_come_from_guess() {
        let guess = movie(2, "2015", "PG-13", &["Comedy"], &["Carol Clark"]);
        let result = compare(&guess, &target(), &GuessOptions::default()).unwrap();

        assert_eq!(result.field(FieldKey::Year).unwrap().values, vec!["2015"]);
        assert_eq!(result.field(FieldKey::Rating).unwrap().values, vec!["PG-13"]);
        assert_eq!(result.field(FieldKey::Genre).unwrap().values, vec!["Comedy"]);
        // Cast values are names only, roles dropped
        assert_eq!(
            result.field(FieldKey::Cast).unwrap().values,
            vec!["Carol Clark"]
        );
    }

    #[test]
    fn test_year_direction_and_color() {
        let guess = movie(2, "2015", "R", &["Drama", "Action"], &["Alice Adams"]);
        let result = compare(&guess, &target(), &GuessOptions::default()).unwrap();

        let year = result.field(FieldKey::Year).unwrap();
        assert_eq!(year.color, Color::Yellow);
        assert_eq!(year.direction, 1);
    }

    #[test]
    fn test_rating_yellow_neutral_direction() {
        let guess = movie(2, "2020", "PG-13", &["Drama", "Action"], &[]);
        let result = compare(&guess, &target(), &GuessOptions::default()).unwrap();

        let rating = result.field(FieldKey::Rating).unwrap();
        assert_eq!(rating.color, Color::Yellow);
        assert_eq!(rating.direction, 0);
    }

    #[test]
    fn test_genre_order_sensitivity() {
        let guess = movie(
            2,
            "2020",
            "R",
            &["Action", "Drama"],
            &["Alice Adams", "Bob Brown"],
        );
        let result = compare(&guess, &target(), &GuessOptions::default()).unwrap();
        assert_eq!(result.field(FieldKey::Genre).unwrap().color, Color::Yellow);
    }

    #[test]
    fn test_invalid_options_rejected_before_fields() {
        let bad = GuessOptions {
            cast_yellow_threshold: 0,
            ..GuessOptions::default()
        };
        // A record with an unparseable year would fail later; the options
        // failure must win, proving validation happens first.
        let junk = movie(2, "not-a-year", "R", &[], &[]);
        let err = compare(&junk, &target(), &bad).unwrap_err();
        assert!(matches!(err, GameError::InvalidOptions(_)));
    }

    #[test]
    fn test_unparseable_year_rejected() {
        let junk = movie(2, "199X", "R", &["Drama"], &[]);
        let err = compare(&junk, &target(), &GuessOptions::default()).unwrap_err();
        assert_eq!(err, GameError::YearParse("199X".to_string()));
    }
}
