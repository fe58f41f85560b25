//! Per-field classifiers.
//!
//! Each classifier is a pure function from (guessed value, target value,
//! thresholds) to a color and direction. Only the year classifier reports a
//! non-neutral direction; rating and the set-valued fields stay at 0.

use reeldle_models::Color;

/// Classify an ordinal-numeric field (year).
///
/// `diff = guessed - target`. Green on exact match, yellow within the yellow
/// threshold, grey beyond. Direction points at the target: 1 means the
/// target is later than the guess, -1 earlier, doubling to +-2 past the
/// double-arrow threshold.
pub fn classify_year(
    guessed: i64,
    target: i64,
    yellow_threshold: i64,
    double_arrow_threshold: i64,
) -> (Color, i8) {
    let diff = guessed - target;

    let color = if diff == 0 {
        Color::Green
    } else if diff.abs() <= yellow_threshold {
        Color::Yellow
    } else {
        Color::Grey
    };

    let direction = if diff == 0 {
        0
    } else if diff < -double_arrow_threshold {
        2
    } else if diff < 0 {
        1
    } else if diff > double_arrow_threshold {
        -2
    } else {
        -1
    };

    (color, direction)
}

/// Map a certification string to its ordinal; unknown strings map to -1.
pub fn rating_ordinal(rating: &str) -> i64 {
    match rating.to_uppercase().as_str() {
        "G" => 0,
        "PG" => 1,
        "PG-13" => 2,
        "R" => 3,
        "NC-17" => 4,
        _ => -1,
    }
}

/// Classify the mapped-ordinal rating field.
///
/// Color follows the numeric rule over rating ordinals; direction is always
/// neutral by product decision.
pub fn classify_rating(guessed: &str, target: &str, yellow_threshold: i64) -> (Color, i8) {
    let diff = rating_ordinal(guessed) - rating_ordinal(target);

    let color = if diff == 0 {
        Color::Green
    } else if diff.abs() <= yellow_threshold {
        Color::Yellow
    } else {
        Color::Grey
    };

    (color, 0)
}

/// Classify a set-valued field (genres, cast names).
///
/// Green only when the sequences are equal element-for-element in order and
/// length; yellow when the sets share at least one element; grey otherwise.
pub fn classify_sequence(guessed: &[String], target: &[String]) -> (Color, i8) {
    if guessed == target {
        return (Color::Green, 0);
    }

    let shared = guessed.iter().any(|g| target.contains(g));
    let color = if shared { Color::Yellow } else { Color::Grey };

    (color, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_year_exact_match() {
        assert_eq!(classify_year(2020, 2020, 5, 10), (Color::Green, 0));
    }

    #[test]
    fn test_year_within_yellow_target_later() {
        // diff = -5: within yellow, target later by a single arrow
        assert_eq!(classify_year(2015, 2020, 5, 10), (Color::Yellow, 1));
    }

    #[test]
    fn test_year_far_past_target() {
        // diff = -20: beyond both thresholds
        assert_eq!(classify_year(2000, 2020, 5, 10), (Color::Grey, 2));
    }

    #[test]
    fn test_year_target_earlier() {
        assert_eq!(classify_year(2023, 2020, 5, 10), (Color::Yellow, -1));
        assert_eq!(classify_year(2040, 2020, 5, 10), (Color::Grey, -2));
    }

    #[test]
    fn test_year_boundary_bands() {
        // |diff| exactly at the double-arrow threshold stays single-arrow
        assert_eq!(classify_year(2010, 2020, 5, 10), (Color::Grey, 1));
        assert_eq!(classify_year(2030, 2020, 5, 10), (Color::Grey, -1));
        // one past it doubles
        assert_eq!(classify_year(2009, 2020, 5, 10), (Color::Grey, 2));
    }

    #[test]
    fn test_rating_ordinals() {
        assert_eq!(rating_ordinal("G"), 0);
        assert_eq!(rating_ordinal("pg-13"), 2);
        assert_eq!(rating_ordinal("NC-17"), 4);
        assert_eq!(rating_ordinal("UNK"), -1);
        assert_eq!(rating_ordinal("TV-MA"), -1);
    }

    #[test]
    fn test_rating_adjacent_is_yellow() {
        assert_eq!(classify_rating("PG-13", "R", 1), (Color::Yellow, 0));
    }

    #[test]
    fn test_rating_equal_and_distant() {
        assert_eq!(classify_rating("R", "r", 1), (Color::Green, 0));
        assert_eq!(classify_rating("G", "R", 1), (Color::Grey, 0));
    }

    #[test]
    fn test_rating_unknown_matches_unknown() {
        // Both unmapped: ordinals are both -1, an exact match
        assert_eq!(classify_rating("UNK", "NR", 1), (Color::Green, 0));
    }

    #[test]
    fn test_sequence_order_sensitive() {
        // Same multiset, different order: yellow, not green
        let guessed = strings(&["Action", "Drama"]);
        let target = strings(&["Drama", "Action"]);
        assert_eq!(classify_sequence(&guessed, &target), (Color::Yellow, 0));
    }

    #[test]
    fn test_sequence_exact_is_green() {
        let list = strings(&["Action", "Drama"]);
        assert_eq!(classify_sequence(&list, &list.clone()), (Color::Green, 0));
    }

    #[test]
    fn test_sequence_partial_overlap() {
        let guessed = strings(&["Action", "Comedy"]);
        let target = strings(&["Action", "Drama"]);
        assert_eq!(classify_sequence(&guessed, &target), (Color::Yellow, 0));
    }

    #[test]
    fn test_sequence_disjoint_is_grey() {
        let guessed = strings(&["Comedy"]);
        let target = strings(&["Horror", "Thriller"]);
        assert_eq!(classify_sequence(&guessed, &target), (Color::Grey, 0));
    }

    #[test]
    fn test_sequence_length_mismatch_not_green() {
        let guessed = strings(&["Action"]);
        let target = strings(&["Action", "Drama"]);
        assert_eq!(classify_sequence(&guessed, &target), (Color::Yellow, 0));
    }
}
