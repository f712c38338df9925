/// Type-Aware Record Sorting
///
/// Sorting produces a new ordered sequence and never mutates its input. The
/// comparator consults the column registry to pick comparison semantics:
/// text columns compare lexicographically case-insensitive, number columns
/// numerically. Null and missing values normalize to the lowest value of
/// the column type (empty string or zero) instead of panicking, so a sparse
/// field never breaks ordering. The underlying sort is stable, which keeps
/// ties in input order and makes re-sorts deterministic.

use crate::error::ConfigError;
use crate::schema::ColumnSet;
use crate::value::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Parse a direction token.
    ///
    /// Accepts "asc" and "desc" in any case. Anything else is a
    /// configuration error, not a silent default.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        match token.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(ConfigError::InvalidSortDirection(token.to_string())),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort records by a single field, returning a new sequence.
///
/// The field's column type selects the comparator; fields not present in
/// the registry compare under number semantics.
pub fn sort_records(
    records: &[Record],
    field: &str,
    direction: SortDirection,
    columns: &ColumnSet,
) -> Vec<Record> {
    let is_text = columns.is_text(field);

    let mut sorted: Vec<Record> = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_field(a.get(field), b.get(field), is_text);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    sorted
}

/// Compare two optional field values under text or number semantics
fn compare_field(a: Option<&FieldValue>, b: Option<&FieldValue>, is_text: bool) -> Ordering {
    if is_text {
        text_key(a).cmp(&text_key(b))
    } else {
        number_key(a)
            .partial_cmp(&number_key(b))
            .unwrap_or(Ordering::Equal)
    }
}

/// Lowercased string form; null and missing normalize to the empty string
fn text_key(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(s)) => s.to_lowercase(),
        Some(FieldValue::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Numeric form; null, missing and non-numeric text normalize to zero
fn number_key(value: Option<&FieldValue>) -> f64 {
    match value {
        Some(FieldValue::Number(n)) => *n,
        Some(FieldValue::Text(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
