//! Client-side paging over an already fetched collection.
//!
//! Pages are 1-based. Page `p` covers `[(p - 1) * PAGE_SIZE, p * PAGE_SIZE)`
//! clipped to the collection length.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::ops::Range;

pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `len` items.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range shown on `page`. Page `0` is treated as page `1`.
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let page = page.max(1);
    let start = ((page - 1) * PAGE_SIZE).min(len);
    let end = (page * PAGE_SIZE).min(len);
    start..end
}

/// Pull `page` back into `1..=page_count(len)` (page 1 for an empty list).
pub fn clamp_page(len: usize, page: usize) -> usize {
    page.clamp(1, page_count(len).max(1))
}
