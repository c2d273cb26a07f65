//! Pagination utilities for the data grid (100 rows/page)

/// Page size constant for all pagination
pub const PAGE_SIZE: usize = 100;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// Index of the first row on the page
    pub offset: usize,
}

/// Calculate pagination metadata from total results and requested page.
///
/// Ensures page is within valid bounds [1, total_pages]; an out-of-bounds
/// request is clamped rather than rejected.
pub fn calculate_pagination(total_results: usize, requested_page: usize) -> Pagination {
    let total_pages = (total_results + PAGE_SIZE - 1) / PAGE_SIZE;
    let page = requested_page.max(1).min(total_pages.max(1));
    let offset = (page - 1) * PAGE_SIZE;

    Pagination {
        page,
        total_pages,
        offset,
    }
}
