//! Page-by-page navigation calculator.
//!
//! One pass over four integers produces the complete navigation state for a
//! paginated listing: the clamped current page, its neighbors, the window of
//! page numbers a navigation bar should render (the "set"), the nearest page
//! of each adjacent window, and the zero-based slice bounds of the current
//! page within the entry collection.
//!
//! Page numbers are 1-indexed. Slice offsets are 0-indexed and inclusive on
//! both ends, so `start_of_slice..=end_of_slice` indexes the entries of the
//! current page directly.

use serde::Serialize;

use crate::errors::PaginationError;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Complete pagination state for one requested page.
///
/// Fully computed by [`Pagination::new`] and never mutated afterwards.
/// The snake_case field names are a stable contract: templating and view
/// layers consume this struct through its `Serialize` impl, and the four
/// `Option` fields serialize as `null` when the page they point at does not
/// exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Total number of entries (copied from arguments).
    pub total_entries: u64,
    /// Number of entries per page (copied from arguments).
    pub entries_per_page: u64,
    /// Number of page links per navigation set (copied from arguments).
    pub pages_per_set: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Current page number, clamped into `1..=total_pages`.
    pub current_page: u64,
    /// Previous page number, `None` on the first page.
    pub prev_page: Option<u64>,
    /// Next page number, `None` on the last page.
    pub next_page: Option<u64>,
    /// First page number of the set containing the current page.
    pub start_of_set: u64,
    /// Last page number of that set, clamped to `total_pages`.
    pub end_of_set: u64,
    /// Every page number of the set, ascending and consecutive.
    pub numbers_of_set: Vec<u64>,
    /// Nearest page of the previous set, `None` if this set is the first.
    pub page_of_prev_set: Option<u64>,
    /// Nearest page of the next set, `None` if this set is the last.
    pub page_of_next_set: Option<u64>,
    /// Zero-based offset of the first entry of the current page.
    pub start_of_slice: u64,
    /// Zero-based offset of the last entry of the current page (inclusive).
    pub end_of_slice: u64,
    /// Number of entries on the current page.
    pub length_of_slice: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core
// ────────────────────────────────────────────────────────────────────────────

impl Pagination {
    /// Computes the pagination state for one request.
    ///
    /// `current_page` is accepted as given and clamped into
    /// `1..=total_pages`; a request for page 0 lands on the first page and a
    /// request past the end lands on the last. The three sizing arguments
    /// must be at least 1, otherwise
    /// [`InvalidArgument`](PaginationError::InvalidArgument) names the
    /// offending argument.
    pub fn new(
        total_entries: u64,
        entries_per_page: u64,
        pages_per_set: u64,
        current_page: u64,
    ) -> Result<Self, PaginationError> {
        require_at_least_one("total_entries", total_entries)?;
        require_at_least_one("entries_per_page", entries_per_page)?;
        require_at_least_one("pages_per_set", pages_per_set)?;

        let total_pages = total_entries.div_ceil(entries_per_page);

        let current_page = current_page.clamp(1, total_pages);

        let prev_page = (current_page > 1).then(|| current_page - 1);
        let next_page = (current_page < total_pages).then(|| current_page + 1);

        // The set containing page N starts at the nearest set-aligned
        // boundary at or below N (integer floor division).
        let start_of_set = pages_per_set * ((current_page - 1) / pages_per_set) + 1;
        let end_of_set = (start_of_set + pages_per_set - 1).min(total_pages);
        let numbers_of_set: Vec<u64> = (start_of_set..=end_of_set).collect();

        let page_of_prev_set = (start_of_set > 1).then(|| start_of_set - 1);
        let page_of_next_set = (end_of_set < total_pages).then(|| end_of_set + 1);

        let start_of_slice = (current_page - 1) * entries_per_page;
        let end_of_slice = (start_of_slice + entries_per_page - 1).min(total_entries - 1);
        let length_of_slice = end_of_slice - start_of_slice + 1;

        tracing::trace!(
            total_pages,
            current_page,
            start_of_set,
            end_of_set,
            "computed pagination window"
        );

        Ok(Self {
            total_entries,
            entries_per_page,
            pages_per_set,
            total_pages,
            current_page,
            prev_page,
            next_page,
            start_of_set,
            end_of_set,
            numbers_of_set,
            page_of_prev_set,
            page_of_next_set,
            start_of_slice,
            end_of_slice,
            length_of_slice,
        })
    }
}

fn require_at_least_one(name: &'static str, value: u64) -> Result<(), PaginationError> {
    if value < 1 {
        return Err(PaginationError::InvalidArgument { name, value });
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
