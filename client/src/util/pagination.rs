//! Client-side table paging.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

/// Rows per table page.
pub const PAGE_SIZE: usize = 50;

/// Number of pages needed for `total` rows. An empty table still has one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Largest valid page index not greater than `page`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

/// Index range of the rows shown on `page`.
pub fn page_range(page: usize, total: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..total;
    }
    let page = clamp_page(page, total, page_size);
    let start = page * page_size;
    start.min(total)..(start + page_size).min(total)
}
