/// Column Definitions and the Field Type Registry
///
/// A Column declares, per field, the semantic type used to choose comparison
/// semantics, plus the sortable/editable flags and a display label carried
/// for table consumers. A ColumnSet is the registry the sorter consults; it
/// is supplied at construction and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Semantic column types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
}

/// A single column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Field the column reads from each record
    pub field_name: String,
    /// Human-readable label; not consulted by any derivation logic
    pub label: String,
    /// Semantic type driving comparator selection
    pub field_type: FieldType,
    pub sortable: bool,
    pub editable: bool,
}

impl Column {
    /// Create a text column. Flags default to off; chain `sortable()` /
    /// `editable()` to enable them.
    pub fn text(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            field_name: field_name.into(),
            label: label.into(),
            field_type: FieldType::Text,
            sortable: false,
            editable: false,
        }
    }

    /// Create a number column
    pub fn number(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            field_name: field_name.into(),
            label: label.into(),
            field_type: FieldType::Number,
            sortable: false,
            editable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }
}

/// Registry of column definitions.
///
/// # Examples
///
/// ```
/// use recordview::{Column, ColumnSet, FieldType};
///
/// let columns = ColumnSet::new(vec![
///     Column::text("Name", "Account Name").sortable(),
///     Column::number("AnnualRevenue", "Annual Revenue").sortable().editable(),
/// ]);
///
/// assert_eq!(columns.field_type("Name"), Some(FieldType::Text));
/// assert!(columns.is_sortable("AnnualRevenue"));
/// assert!(!columns.is_editable("Name"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn new(columns: Vec<Column>) -> Self {
        ColumnSet { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by field name
    pub fn get(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field_name == field)
    }

    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.get(field).map(|c| c.field_type)
    }

    /// Returns true when the field is declared as a text column.
    /// Unknown fields compare under number semantics.
    pub fn is_text(&self, field: &str) -> bool {
        self.field_type(field) == Some(FieldType::Text)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.get(field).map(|c| c.sortable).unwrap_or(false)
    }

    pub fn is_editable(&self, field: &str) -> bool {
        self.get(field).map(|c| c.editable).unwrap_or(false)
    }

    /// Returns a list of all field names, in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.field_name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }
}
