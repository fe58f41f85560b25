//! Diff result wire types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Closeness color for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Exact match
    Green,
    /// Within the field's yellow threshold / partial overlap
    Yellow,
    /// No meaningful closeness
    Grey,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Grey => "grey",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The tracked fields of a movie record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Rating,
    Year,
    Genre,
    Cast,
}

impl FieldKey {
    /// All tracked fields. The diff engine produces exactly one entry per key.
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Rating,
        FieldKey::Year,
        FieldKey::Genre,
        FieldKey::Cast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Rating => "rating",
            FieldKey::Year => "year",
            FieldKey::Genre => "genre",
            FieldKey::Cast => "cast",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field's comparison outcome.
///
/// `direction` is one of `{-2, -1, 0, 1, 2}`: negative means the target is
/// earlier/lower than the guess, positive later/higher, with magnitude 2 past
/// the double-arrow threshold. Only the year field ever reports a non-zero
/// direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDiff {
    pub color: Color,
    pub direction: i8,
    /// Displayable values, always the guessed movie's own
    pub values: Vec<String>,
}

impl FieldDiff {
    pub fn new(color: Color, direction: i8, values: Vec<String>) -> Self {
        Self {
            color,
            direction,
            values,
        }
    }
}

/// The full per-field comparison returned to a guess.
///
/// Produced fresh per comparison and never mutated after construction; no
/// field ordering is guaranteed beyond all four keys being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiffResult {
    pub fields: HashMap<FieldKey, FieldDiff>,
}

impl DiffResult {
    pub fn new(fields: HashMap<FieldKey, FieldDiff>) -> Self {
        Self { fields }
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldDiff> {
        self.fields.get(&key)
    }

    /// True when every tracked field matched exactly.
    pub fn is_win(&self) -> bool {
        FieldKey::ALL
            .iter()
            .all(|k| self.fields.get(k).map(|f| f.color == Color::Green) == Some(true))
    }
}
