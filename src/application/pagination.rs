//! Shared page-number pagination math.
//!
//! Pages are 1-based. The helpers are pure and assume callers have already
//! validated that the page size is positive.

use std::ops::Range;

/// Total pages for a result set: at least 1, even when nothing matched.
/// An empty first page is a valid listing.
pub fn total_pages(total_matched: usize, page_size: u32) -> u32 {
    let pages = total_matched.div_ceil(page_size as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Half-open index range of `page` within a collection of `total_matched`
/// items. A page past the end yields an empty range; whether to clamp back
/// into range is the caller's policy, never this module's.
pub fn page_bounds(total_matched: usize, page: u32, page_size: u32) -> Range<usize> {
    let size = page_size as usize;
    let start = (page.saturating_sub(1) as usize)
        .saturating_mul(size)
        .min(total_matched);
    let end = start.saturating_add(size).min(total_matched);
    start..end
}
