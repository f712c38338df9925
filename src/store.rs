/// RecordStore - the Owning View Engine
///
/// The store owns the authoritative record set, the active searched+sorted
/// subset derived from it, and the current page slice. Every mutator runs
/// the derivation pipeline (filter, then sort, then paginate) to
/// completion before returning, so no two derivation passes can
/// interleave. There is exactly one live ViewState per store, and callers
/// hold the single mutable owner; the store performs no I/O of its own.
///
/// # Examples
///
/// ```
/// use recordview::{Column, ColumnSet, FieldValue, Record, RecordStore, SortDirection};
///
/// let columns = ColumnSet::new(vec![
///     Column::text("Name", "Account Name").sortable(),
///     Column::number("AnnualRevenue", "Annual Revenue").sortable().editable(),
/// ]);
///
/// let mut store = RecordStore::new(columns, 10).unwrap();
///
/// let records: Vec<Record> = ["Beta", "Acme"]
///     .iter()
///     .map(|name| {
///         let mut record = Record::new();
///         record.insert("Name".to_string(), FieldValue::from(*name));
///         record
///     })
///     .collect();
/// store.set_all(records);
///
/// store.set_sort("Name", SortDirection::Ascending);
/// assert_eq!(
///     store.page().records[0].get("Name").unwrap().as_text(),
///     Some("Acme")
/// );
/// ```

use crate::edit::{merge_edits, RecordEdit};
use crate::error::{ConfigError, EditFailure};
use crate::page::{slice_page, Page};
use crate::schema::ColumnSet;
use crate::search::filter_records;
use crate::sort::{sort_records, SortDirection};
use crate::value::Record;

/// Live view parameters. Exactly one per store.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Current 1-based page number, clamped on every pagination pass
    pub page_number: usize,
    /// Records per page; validated greater than zero at construction
    pub page_size: usize,
    /// Active sort field, if any
    pub sort_field: Option<String>,
    /// Active sort direction, if any
    pub sort_direction: Option<SortDirection>,
    /// Active search term; empty means no filtering
    pub search_term: String,
    /// Field the search term applies to
    pub search_field: Option<String>,
}

impl ViewState {
    fn initial(page_size: usize) -> Self {
        ViewState {
            page_number: 1,
            page_size,
            sort_field: None,
            sort_direction: None,
            search_term: String::new(),
            search_field: None,
        }
    }
}

/// Root store owning the authoritative set and its derived view
#[derive(Debug)]
pub struct RecordStore {
    columns: ColumnSet,
    /// Authoritative full record set, source of truth for all derivations
    records: Vec<Record>,
    /// Searched + sorted subset the page is sliced from
    derived: Vec<Record>,
    view: ViewState,
    page: Page,
}

impl RecordStore {
    /// Create an empty store. A zero page size is rejected, never clamped.
    pub fn new(columns: ColumnSet, page_size: usize) -> Result<Self, ConfigError> {
        let page = slice_page(&[], 1, page_size)?;
        Ok(RecordStore {
            columns,
            records: Vec::new(),
            derived: Vec::new(),
            view: ViewState::initial(page_size),
            page,
        })
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// The authoritative full record set
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The current searched + sorted subset
    pub fn derived(&self) -> &[Record] {
        &self.derived
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    /// The current page. Pure read; no recomputation side effect.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Replace the authoritative set wholesale.
    ///
    /// Search and sort reset and the view returns to page 1.
    pub fn set_all(&mut self, records: Vec<Record>) {
        self.records = records;
        self.view.search_term.clear();
        self.view.search_field = None;
        self.view.sort_field = None;
        self.view.sort_direction = None;
        self.view.page_number = 1;
        self.rederive();
    }

    /// Filter by a case-insensitive substring on `field`.
    ///
    /// An empty term restores the full set. The current sort is preserved
    /// and re-applied to the new subset. The changed result set invalidates
    /// the prior page, so the view returns to page 1.
    pub fn set_search(&mut self, term: &str, field: &str) {
        self.view.search_term = term.to_string();
        self.view.search_field = Some(field.to_string());
        self.view.page_number = 1;
        self.rederive();
    }

    /// Re-sort the current derived subset by `field`.
    ///
    /// The search is not re-run; the page number survives, clamped against
    /// the (unchanged) subset length.
    pub fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.view.sort_field = Some(field.to_string());
        self.view.sort_direction = Some(direction);
        self.derived = sort_records(&self.derived, field, direction, &self.columns);
        self.repaginate();
    }

    /// Sort using a raw direction token ("asc" or "desc", any case).
    ///
    /// An unknown token is a configuration error and nothing changes.
    pub fn set_sort_token(&mut self, field: &str, direction: &str) -> Result<(), ConfigError> {
        let direction = SortDirection::parse(direction)?;
        self.set_sort(field, direction);
        Ok(())
    }

    /// Jump to a page. Out-of-range values clamp, never fail.
    pub fn set_page(&mut self, page_number: usize) {
        self.view.page_number = page_number;
        self.repaginate();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.view.page_number + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.view.page_number.saturating_sub(1));
    }

    /// True when the view is on the first page
    pub fn is_first_page(&self) -> bool {
        self.page.page_number == 1
    }

    /// True when the view is on the final page
    pub fn is_last_page(&self) -> bool {
        self.page.page_number == self.page.total_pages
    }

    /// Merge a batch of partial edits into the authoritative set.
    ///
    /// The active search and sort are re-applied to the updated set and the
    /// page number is preserved, clamped. Edits referencing positions
    /// outside the set are reported back, not raised.
    pub fn apply_edits(&mut self, edits: &[RecordEdit]) -> Vec<EditFailure> {
        let outcome = merge_edits(&self.records, edits);
        self.records = outcome.records;
        self.rederive();
        outcome.failures
    }

    /// Run the derivation pipeline: filter, then sort, then paginate.
    fn rederive(&mut self) {
        self.derived = match &self.view.search_field {
            Some(field) if !self.view.search_term.is_empty() => {
                filter_records(&self.records, &self.view.search_term, field)
            }
            _ => self.records.clone(),
        };

        if let (Some(field), Some(direction)) = (&self.view.sort_field, self.view.sort_direction) {
            self.derived = sort_records(&self.derived, field, direction, &self.columns);
        }

        self.repaginate();
    }

    /// Recompute the page slice and write the clamped page number back.
    fn repaginate(&mut self) {
        self.page = slice_page(&self.derived, self.view.page_number, self.view.page_size)
            .expect("page size is validated at construction");
        self.view.page_number = self.page.page_number;
    }
}
