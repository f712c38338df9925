/// RecordView Field Values
///
/// A FieldValue is a single dynamically-typed cell value: text, number, or
/// null. A Record is a plain field-name → value map with no enforced schema;
/// fields are looked up by name and record identity is positional within the
/// set that owns it.
///
/// # Wire Shape
///
/// The serde representation is untagged, so a record round-trips through the
/// JSON object shape external sources deliver: strings stay strings, numbers
/// stay numbers, and null stays null.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// A single field value within a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Null,
}

/// A record: a field-name → value mapping with no fixed schema
pub type Record = HashMap<String, FieldValue>;

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// String form of the value, as used by substring search.
    /// Null has no string form.
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(v) => Some(v.clone()),
            FieldValue::Number(v) => Some(v.to_string()),
            FieldValue::Null => None,
        }
    }

    /// Convert a JSON value into a field value.
    ///
    /// Strings, numbers and null map directly. Anything else (booleans,
    /// arrays, objects) falls back to its JSON text form so a malformed
    /// source row never fails the whole load.
    pub fn from_json(value: &JsonValue) -> FieldValue {
        match value {
            JsonValue::Null => FieldValue::Null,
            JsonValue::String(s) => FieldValue::Text(s.clone()),
            JsonValue::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(0.0)),
            other => FieldValue::Text(other.to_string()),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::Text(v) => JsonValue::String(v.clone()),
            FieldValue::Number(v) => serde_json::json!(*v),
            FieldValue::Null => JsonValue::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

/// Convert a JSON object into a record
pub fn record_from_json(object: &serde_json::Map<String, JsonValue>) -> Record {
    object
        .iter()
        .map(|(name, value)| (name.clone(), FieldValue::from_json(value)))
        .collect()
}

/// Convert a record into a JSON object
pub fn record_to_json(record: &Record) -> serde_json::Map<String, JsonValue> {
    record
        .iter()
        .map(|(name, value)| (name.clone(), value.to_json()))
        .collect()
}
