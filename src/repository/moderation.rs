//! Moderation log repository contract

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{ModerationLogEntry, ModerationType};

/// Append-and-query access to the moderation log.
#[async_trait]
pub trait ModerationLogRepository: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn log(
        &self,
        moderation_time: DateTime<Utc>,
        user_id: i64,
        user_name: &str,
        moderation_type: ModerationType,
        forum_id: Option<i64>,
        topic_id: i64,
        post_id: Option<i64>,
        comment: &str,
        old_text: &str,
    ) -> Result<()>;

    async fn get_log_by_date(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ModerationLogEntry>>;

    async fn get_log_for_topic(
        &self,
        topic_id: i64,
        exclude_post_entries: bool,
    ) -> Result<Vec<ModerationLogEntry>>;

    async fn get_log_for_post(&self, post_id: i64) -> Result<Vec<ModerationLogEntry>>;
}
