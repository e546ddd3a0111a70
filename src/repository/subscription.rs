//! Subscription repository contracts

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{SubscribeNotificationPayload, Topic};

/// Persistence operations for per-user topic subscriptions.
#[async_trait]
pub trait SubscribedTopicsRepository: Send + Sync {
    /// Page of subscribed topics, newest first. `start_row` is a 1-based
    /// offset.
    async fn get_subscribed_topics(
        &self,
        user_id: i64,
        start_row: i32,
        page_size: i32,
    ) -> Result<Vec<Topic>>;

    async fn get_subscribed_topic_count(&self, user_id: i64) -> Result<i32>;

    async fn is_topic_subscribed(&self, user_id: i64, topic_id: i64) -> Result<bool>;

    async fn add_subscribed_topic(&self, user_id: i64, topic_id: i64) -> Result<()>;

    async fn remove_subscribed_topic(&self, user_id: i64, topic_id: i64) -> Result<()>;

    async fn get_subscribed_user_ids(&self, topic_id: i64) -> Result<Vec<i64>>;
}

/// Queue of notification payloads awaiting fan-out to subscribers.
///
/// The service layer only enqueues; a delivery worker elsewhere drains the
/// queue.
#[async_trait]
pub trait SubscribeNotificationRepository: Send + Sync {
    async fn enqueue(&self, payload: &SubscribeNotificationPayload) -> Result<()>;
}
