//! Moderation log models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of moderation action being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationType {
    TopicDeleted,
    TopicUndeleted,
    TopicClosed,
    TopicOpened,
    TopicPinned,
    TopicUnpinned,
    TopicMoved,
    TopicRenamed,
    TopicDeletedPermanently,
    PostDeleted,
    PostUndeleted,
    PostEdited,
    PostDeletedPermanently,
}

/// One persisted moderation log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationLogEntry {
    pub moderation_time: DateTime<Utc>,
    /// Acting user; 0 for system-initiated actions
    pub user_id: i64,
    pub user_name: String,
    pub moderation_type: ModerationType,
    pub forum_id: Option<i64>,
    pub topic_id: i64,
    pub post_id: Option<i64>,
    pub comment: String,
    /// Previous text for edits, empty otherwise
    pub old_text: String,
}
