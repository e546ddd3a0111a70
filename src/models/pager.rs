//! Pagination context

use serde::{Deserialize, Serialize};

/// Paging metadata returned alongside a page of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerContext {
    /// Total number of pages
    pub page_count: i32,
    /// Requested page, 1-based
    pub page_index: i32,
    /// Rows per page
    pub page_size: i32,
}

impl PagerContext {
    /// Build paging metadata from a total row count.
    pub fn new(item_count: i32, page_index: i32, page_size: i32) -> Self {
        let page_count = if page_size > 0 {
            (item_count + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            page_count,
            page_index,
            page_size,
        }
    }

    /// First row of a page as a 1-based offset.
    pub fn start_row(page_index: i32, page_size: i32) -> i32 {
        (page_index - 1) * page_size + 1
    }
}
