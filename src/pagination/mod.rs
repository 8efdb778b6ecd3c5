//! Pagination Module
//!
//! Offset arithmetic for 1-indexed pages and a lazily loaded CSV dataset
//! to slice with it. Independent of the cache.

mod dataset;

pub use dataset::{Dataset, Row};

// == Index Range ==
/// Returns the `[start, end)` row range covered by `page`.
///
/// Pages are 1-indexed; any page below 1 is treated as page 1.
///
/// ```
/// use policy_cache::pagination::index_range;
///
/// assert_eq!(index_range(1, 7), (0, 7));
/// assert_eq!(index_range(3, 15), (30, 45));
/// ```
pub fn index_range(page: i64, page_size: usize) -> (usize, usize) {
    let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let start = (page - 1).saturating_mul(page_size);
    let end = page.saturating_mul(page_size);
    (start, end)
}
