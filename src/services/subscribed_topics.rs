//! Subscribed topics service
//!
//! Subscription bookkeeping plus notification enqueueing. This layer never
//! delivers notifications; it hands a payload to the subscription queue and
//! a fan-out worker elsewhere does the rest.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::SettingsManager;
use crate::models::{PagerContext, SubscribeNotificationPayload, Topic, User};
use crate::repository::{SubscribeNotificationRepository, SubscribedTopicsRepository};

pub struct SubscribedTopicsService {
    subscribed_repo: Arc<dyn SubscribedTopicsRepository>,
    settings_manager: Arc<dyn SettingsManager>,
    notification_repo: Arc<dyn SubscribeNotificationRepository>,
}

impl SubscribedTopicsService {
    pub fn new(
        subscribed_repo: Arc<dyn SubscribedTopicsRepository>,
        settings_manager: Arc<dyn SettingsManager>,
        notification_repo: Arc<dyn SubscribeNotificationRepository>,
    ) -> Self {
        Self {
            subscribed_repo,
            settings_manager,
            notification_repo,
        }
    }

    /// Subscribe a user to a topic. Already-subscribed users are left alone.
    pub async fn add_subscribed_topic(&self, user_id: i64, topic_id: i64) -> Result<()> {
        let is_subscribed = self
            .subscribed_repo
            .is_topic_subscribed(user_id, topic_id)
            .await
            .context("Failed to check subscription")?;
        if !is_subscribed {
            self.subscribed_repo
                .add_subscribed_topic(user_id, topic_id)
                .await
                .context("Failed to add subscription")?;
        }
        Ok(())
    }

    pub async fn remove_subscribed_topic(&self, user: &User, topic: &Topic) -> Result<()> {
        self.subscribed_repo
            .remove_subscribed_topic(user.user_id, topic.topic_id)
            .await
    }

    /// Remove a subscription when both a user and a topic are at hand; a
    /// missing side is a no-op, not an error.
    pub async fn try_remove_subscribed_topic(
        &self,
        user: Option<&User>,
        topic: Option<&Topic>,
    ) -> Result<()> {
        if let (Some(user), Some(topic)) = (user, topic) {
            self.remove_subscribed_topic(user, topic).await?;
        }
        Ok(())
    }

    /// Enqueue a notification payload for the topic's subscribers.
    pub async fn notify_subscribers(
        &self,
        topic: &Topic,
        posting_user: &User,
        tenant_id: &str,
    ) -> Result<()> {
        let payload = SubscribeNotificationPayload {
            topic_id: topic.topic_id,
            topic_title: topic.title.clone(),
            posting_user_id: posting_user.user_id,
            posting_user_name: posting_user.name.clone(),
            tenant_id: tenant_id.to_string(),
        };
        self.notification_repo
            .enqueue(&payload)
            .await
            .context("Failed to enqueue subscription notification")?;
        tracing::debug!(topic_id = topic.topic_id, "subscriber notification enqueued");
        Ok(())
    }

    /// One page of the user's subscribed topics, with paging metadata.
    pub async fn get_topics(
        &self,
        user: &User,
        page_index: i32,
    ) -> Result<(Vec<Topic>, PagerContext)> {
        let page_size = self.settings_manager.current().topics_per_page;
        let start_row = PagerContext::start_row(page_index, page_size);
        let topics = self
            .subscribed_repo
            .get_subscribed_topics(user.user_id, start_row, page_size)
            .await
            .context("Failed to get subscribed topics")?;
        let topic_count = self
            .subscribed_repo
            .get_subscribed_topic_count(user.user_id)
            .await
            .context("Failed to count subscribed topics")?;
        let pager_context = PagerContext::new(topic_count, page_index, page_size);
        Ok((topics, pager_context))
    }

    pub async fn is_topic_subscribed(&self, user_id: i64, topic_id: i64) -> Result<bool> {
        self.subscribed_repo
            .is_topic_subscribed(user_id, topic_id)
            .await
    }

    pub async fn get_subscribed_user_ids(&self, topic_id: i64) -> Result<Vec<i64>> {
        self.subscribed_repo.get_subscribed_user_ids(topic_id).await
    }
}
