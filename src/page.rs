/// Record Pagination
///
/// Maps a record sequence plus a 1-based page number and page size to a
/// bounded page slice. Out-of-range page numbers clamp into the valid
/// range rather than being rejected. The final page may be short; it is
/// not padded. A zero page size is a configuration error, never clamped.

use crate::error::ConfigError;
use crate::value::Record;

/// A bounded, ordered slice of a derived record sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Records on this page, at most `page_size` of them
    pub records: Vec<Record>,
    /// The clamped 1-based page number this slice represents
    pub page_number: usize,
    /// Total pages in the sequence the slice was taken from, at least 1
    pub total_pages: usize,
}

impl Page {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Total page count for a record count and page size.
///
/// At least 1 even for an empty sequence, so page 1 always exists.
pub fn total_pages(record_count: usize, page_size: usize) -> Result<usize, ConfigError> {
    if page_size == 0 {
        return Err(ConfigError::InvalidPageSize);
    }
    Ok(std::cmp::max(1, record_count.div_ceil(page_size)))
}

/// Clamp the requested page number and slice out the matching page.
pub fn slice_page(
    records: &[Record],
    page_number: usize,
    page_size: usize,
) -> Result<Page, ConfigError> {
    let total = total_pages(records.len(), page_size)?;
    let page_number = page_number.clamp(1, total);

    let start = (page_number - 1) * page_size;
    let end = std::cmp::min(start + page_size, records.len());

    Ok(Page {
        records: records[start..end].to_vec(),
        page_number,
        total_pages: total,
    })
}
