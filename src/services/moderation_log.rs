//! Moderation log service
//!
//! Thin append/query layer over the moderation log repository. Timestamps
//! are assigned here (UTC, at the moment of logging).

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::models::{Forum, ModerationLogEntry, ModerationType, Post, Topic, User};
use crate::repository::ModerationLogRepository;

pub struct ModerationLogService {
    moderation_log_repo: Arc<dyn ModerationLogRepository>,
}

impl ModerationLogService {
    pub fn new(moderation_log_repo: Arc<dyn ModerationLogRepository>) -> Self {
        Self {
            moderation_log_repo,
        }
    }

    /// Log a topic-level moderation action taken by a user.
    pub async fn log_topic(
        &self,
        user: &User,
        moderation_type: ModerationType,
        topic: &Topic,
        forum: Option<&Forum>,
        comment: &str,
    ) -> Result<()> {
        self.moderation_log_repo
            .log(
                Utc::now(),
                user.user_id,
                &user.name,
                moderation_type,
                forum.map(|f| f.forum_id),
                topic.topic_id,
                None,
                comment,
                "",
            )
            .await
    }

    /// Log a topic-level action taken by the system rather than a person.
    pub async fn log_topic_by_system(
        &self,
        moderation_type: ModerationType,
        topic_id: i64,
    ) -> Result<()> {
        self.moderation_log_repo
            .log(
                Utc::now(),
                0,
                "System",
                moderation_type,
                None,
                topic_id,
                None,
                "",
                "",
            )
            .await
    }

    /// Log a post-level moderation action, keeping the pre-edit text.
    pub async fn log_post(
        &self,
        user: &User,
        moderation_type: ModerationType,
        post: &Post,
        comment: &str,
        old_text: &str,
    ) -> Result<()> {
        self.moderation_log_repo
            .log(
                Utc::now(),
                user.user_id,
                &user.name,
                moderation_type,
                None,
                post.topic_id,
                Some(post.post_id),
                comment,
                old_text,
            )
            .await
    }

    pub async fn get_log_by_date(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ModerationLogEntry>> {
        self.moderation_log_repo.get_log_by_date(start, end).await
    }

    pub async fn get_log_for_topic(
        &self,
        topic: &Topic,
        exclude_post_entries: bool,
    ) -> Result<Vec<ModerationLogEntry>> {
        self.moderation_log_repo
            .get_log_for_topic(topic.topic_id, exclude_post_entries)
            .await
    }

    pub async fn get_log_for_post(&self, post: &Post) -> Result<Vec<ModerationLogEntry>> {
        self.moderation_log_repo.get_log_for_post(post.post_id).await
    }
}
