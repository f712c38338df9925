/// Batch Edit Reconciliation
///
/// Edits are partial: each names a record position and the field values to
/// merge into the record there. Reconciliation is copy-on-write: the input
/// sequence and its records are left untouched, so a view taken before the
/// batch stays observable while the batch is in flight. An edit addressing
/// a position outside the set is a no-op recorded as a partial failure,
/// never a fatal error for the batch.

use crate::error::{EditFailure, EditFailureCause};
use crate::value::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A partial edit: field assignments for the record at one position.
///
/// # Examples
///
/// ```
/// use recordview::{FieldValue, RecordEdit};
///
/// let edit = RecordEdit::new(3).set("AnnualRevenue", FieldValue::Number(750.0));
/// assert_eq!(edit.position, 3);
/// assert_eq!(edit.fields.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEdit {
    /// Position of the target record within the authoritative set
    pub position: usize,
    /// Field values to merge; fields not named here are left untouched
    pub fields: HashMap<String, FieldValue>,
}

impl RecordEdit {
    pub fn new(position: usize) -> Self {
        RecordEdit {
            position,
            fields: HashMap::new(),
        }
    }

    /// Add one field assignment, builder-style
    pub fn set(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(field.into(), value);
        self
    }
}

/// Result of merging a batch: the new record sequence plus the entries that
/// did not merge
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub records: Vec<Record>,
    pub failures: Vec<EditFailure>,
}

/// Merge a batch of edits into a record sequence, copy-on-write.
///
/// Edits apply in batch order, so when two edits address the same position
/// the later assignment wins. The returned sequence is new; the input and
/// its records are not mutated.
pub fn merge_edits(records: &[Record], edits: &[RecordEdit]) -> MergeOutcome {
    let mut merged: Vec<Record> = records.to_vec();
    let mut failures = Vec::new();

    for edit in edits {
        match merged.get_mut(edit.position) {
            Some(record) => {
                for (field, value) in &edit.fields {
                    record.insert(field.clone(), value.clone());
                }
            }
            None => failures.push(EditFailure {
                position: edit.position,
                cause: EditFailureCause::OutOfRange,
            }),
        }
    }

    MergeOutcome { records: merged, failures }
}
