//! Forum model

use serde::{Deserialize, Serialize};

/// A container for topics, optionally associated with a category.
///
/// View and post role restrictions are not stored on the entity; they are
/// held by the forum repository and fetched during permission evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    /// Unique identifier
    pub forum_id: i64,
    /// Owning category, if any
    pub category_id: Option<i64>,
    /// Display title
    pub title: String,
    /// Archived forums accept no new posts
    pub is_archived: bool,
}
