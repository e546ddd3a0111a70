//! Category model

use serde::{Deserialize, Serialize};

use crate::services::sort_order::SortOrdered;

/// Top-level grouping that forums are associated with, ordered by an
/// explicit sort key.
///
/// Sort orders are maintained as a dense even sequence (0, 2, 4, ...) by the
/// category service; the odd gaps are what make single-step moves possible
/// without renumbering neighbors by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub category_id: i64,
    /// Display title
    pub title: String,
    /// Position among sibling categories
    pub sort_order: i32,
}

impl SortOrdered for Category {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn set_sort_order(&mut self, value: i32) {
        self.sort_order = value;
    }
}
