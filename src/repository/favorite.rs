//! Favorite-topic repository contract

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Topic;

/// Persistence operations for per-user favorite topics.
#[async_trait]
pub trait FavoriteTopicsRepository: Send + Sync {
    /// Page of favorites, newest first. `start_row` is a 1-based offset.
    async fn get_favorite_topics(
        &self,
        user_id: i64,
        start_row: i32,
        page_size: i32,
    ) -> Result<Vec<Topic>>;

    async fn get_favorite_topic_count(&self, user_id: i64) -> Result<i32>;

    async fn is_topic_favorite(&self, user_id: i64, topic_id: i64) -> Result<bool>;

    async fn add_favorite_topic(&self, user_id: i64, topic_id: i64) -> Result<()>;

    async fn remove_favorite_topic(&self, user_id: i64, topic_id: i64) -> Result<()>;
}
