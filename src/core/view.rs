//! Search-and-paginate view logic.
//!
//! Pure functions of (records, query, requested page, page size): no I/O,
//! no retained state, recomputed on every invocation. The renderers consume
//! the output of [`view`] and turn it into a terminal table or HTML.

use crate::core::search;
use crate::models::Record;

/// Default rows per page, matching the original dashboard.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Default number of slots in the pagination control before the page list
/// collapses into an ellipsized window.
pub const DEFAULT_MAX_DISPLAY: usize = 10;

/// One slot in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Pagination control state, derived on every request from
/// (total_results, page_size, requested_page). Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_results: usize,
    pub prev_page: usize,
    pub next_page: usize,
}

impl Pagination {
    /// Derive the pagination state. `requested_page` may be any integer;
    /// out-of-range values clamp into `[1, total_pages]` instead of erroring.
    pub fn compute(total_results: usize, page_size: usize, requested_page: i64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = (total_results.div_ceil(page_size)).max(1);

        let current_page = requested_page.clamp(1, total_pages as i64) as usize;

        Self {
            current_page,
            total_pages,
            page_size,
            total_results,
            prev_page: current_page.saturating_sub(1).max(1),
            next_page: (current_page + 1).min(total_pages),
        }
    }

    /// First visible row offset (0-based) into the filtered set.
    pub fn start(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    /// One past the last visible row offset, before clamping to the set length.
    pub fn end(&self) -> usize {
        self.start() + self.page_size
    }

    /// Human-readable summary of the visible row range, e.g. "Showing 5-8 of 9".
    pub fn showing_text(&self) -> String {
        if self.total_results == 0 {
            return "Showing 0-0 of 0".to_string();
        }
        format!(
            "Showing {}-{} of {}",
            self.start() + 1,
            self.end().min(self.total_results),
            self.total_results
        )
    }

    /// Compact, possibly-ellipsized list of page numbers for the controls.
    ///
    /// With `total_pages <= max_display` every page is listed. Otherwise the
    /// list always contains page 1 and the last page, a window of two pages
    /// on each side of the current page, and ellipsis markers wherever the
    /// window does not touch the endpoints.
    pub fn window(&self, max_display: usize) -> Vec<PageItem> {
        let mut items = Vec::new();

        if self.total_pages <= max_display {
            items.extend((1..=self.total_pages).map(PageItem::Page));
            return items;
        }

        let left = self.current_page.saturating_sub(2).max(2);
        let right = (self.current_page + 2).min(self.total_pages - 1);

        items.push(PageItem::Page(1));
        if left > 2 {
            items.push(PageItem::Ellipsis);
        }
        items.extend((left..=right).map(PageItem::Page));
        if right < self.total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(self.total_pages));

        items
    }
}

/// The computed view: the current page's rows plus the pagination descriptor.
#[derive(Debug)]
pub struct PageView<'a> {
    pub rows: Vec<&'a Record>,
    pub pagination: Pagination,
}

/// Filter `records` by `query`, then slice out the requested page.
///
/// The slice is bounds-safe: a start offset beyond the filtered length
/// yields an empty page, never a panic.
pub fn view<'a>(
    records: &'a [Record],
    query: &str,
    requested_page: i64,
    page_size: usize,
) -> PageView<'a> {
    let filtered = search::filter(records, query);
    let pagination = Pagination::compute(filtered.len(), page_size, requested_page);

    let start = pagination.start().min(filtered.len());
    let end = pagination.end().min(filtered.len());
    let rows = filtered[start..end].to_vec();

    PageView { rows, pagination }
}

/// Parse a user-supplied page argument. Absent or non-numeric input falls
/// back to page 1; range clamping happens in [`Pagination::compute`].
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1)
}
