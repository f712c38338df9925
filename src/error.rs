/// RecordView Error Taxonomy
///
/// View-computation errors are programming errors: they surface as
/// `ConfigError` and propagate to the caller rather than being hidden.
/// Collaborator I/O errors are recoverable and travel as data: a failed
/// fetch or update leaves the displayed page at its last-known-good state
/// instead of tearing down the view.

use thiserror::Error;

/// Invalid engine configuration. Fatal to the call, never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A page size of zero cannot produce a page slice
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// The sort direction token was neither "asc" nor "desc"
    #[error("unknown sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidSortDirection(String),
}

/// Record source failure. The store keeps its current derived state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record source failure: {0}")]
pub struct FetchError(pub String);

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        FetchError(message.into())
    }
}

/// A single record update rejected by the update collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record update failure: {0}")]
pub struct UpdateError(pub String);

impl UpdateError {
    pub fn new(message: impl Into<String>) -> Self {
        UpdateError(message.into())
    }
}

/// Why a single edit within a batch did not take effect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditFailureCause {
    /// The edit referenced a record position no longer present in the set
    #[error("record position out of range")]
    OutOfRange,

    /// The update collaborator rejected the record
    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// A failed entry within a batch edit.
///
/// The batch itself still completes: failing entries are reported
/// individually while successful entries merge, and the view recomputation
/// runs in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("edit at position {position} failed: {cause}")]
pub struct EditFailure {
    /// Position of the record the edit addressed
    pub position: usize,
    pub cause: EditFailureCause,
}

impl EditFailure {
    pub fn out_of_range(position: usize) -> Self {
        EditFailure {
            position,
            cause: EditFailureCause::OutOfRange,
        }
    }
}
