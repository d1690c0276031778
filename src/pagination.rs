//! Offset-limited result pages.

use serde::Serialize;

/// Slice of an ordered result set paired with the total matching count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filters across all pages.
    pub total: usize,
    /// Zero-based index of this page.
    pub page: usize,
    pub lines_per_page: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, page: usize, lines_per_page: usize) -> Self {
        let total_pages = total.div_ceil(lines_per_page.max(1));

        Self {
            items,
            total,
            page,
            lines_per_page,
            total_pages,
        }
    }
}
