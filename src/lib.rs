/// RecordView - Paginated Record Table Engine
///
/// An in-memory tabular data engine that maintains a paginated, sortable,
/// searchable view over a record set obtained from an external source, and
/// reconciles batched in-place edits back into that view while keeping
/// pagination and ordering state consistent.

pub mod value;
pub mod schema;
pub mod error;
pub mod sort;
pub mod search;
pub mod page;
pub mod edit;
pub mod store;
pub mod session;

pub use value::{record_from_json, record_to_json, FieldValue, Record};
pub use schema::{Column, ColumnSet, FieldType};
pub use error::{ConfigError, EditFailure, EditFailureCause, FetchError, UpdateError};
pub use sort::{sort_records, SortDirection};
pub use search::filter_records;
pub use page::{slice_page, total_pages, Page};
pub use edit::{merge_edits, MergeOutcome, RecordEdit};
pub use store::{RecordStore, ViewState};
pub use session::{
    EditReport, NotificationKind, NotificationSink, RecordSource, RecordUpdater, TableSession,
};
