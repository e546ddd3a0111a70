//! Topic model

use serde::{Deserialize, Serialize};

/// A discussion thread within a forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier
    pub topic_id: i64,
    /// Forum the topic belongs to
    pub forum_id: i64,
    /// Display title
    pub title: String,
    /// Closed topics accept no new posts
    pub is_closed: bool,
    /// Deleted topics are hidden from non-moderators
    pub is_deleted: bool,
}
