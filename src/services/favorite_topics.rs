//! Favorite topics service

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::SettingsManager;
use crate::models::{PagerContext, Topic, User};
use crate::repository::FavoriteTopicsRepository;

/// Per-user favorite topic management with paged listing.
pub struct FavoriteTopicService {
    settings_manager: Arc<dyn SettingsManager>,
    favorite_repo: Arc<dyn FavoriteTopicsRepository>,
}

impl FavoriteTopicService {
    pub fn new(
        settings_manager: Arc<dyn SettingsManager>,
        favorite_repo: Arc<dyn FavoriteTopicsRepository>,
    ) -> Self {
        Self {
            settings_manager,
            favorite_repo,
        }
    }

    /// One page of the user's favorites, with paging metadata. Page size
    /// comes from the topics-per-page setting.
    pub async fn get_topics(
        &self,
        user: &User,
        page_index: i32,
    ) -> Result<(Vec<Topic>, PagerContext)> {
        let page_size = self.settings_manager.current().topics_per_page;
        let start_row = PagerContext::start_row(page_index, page_size);
        let topics = self
            .favorite_repo
            .get_favorite_topics(user.user_id, start_row, page_size)
            .await
            .context("Failed to get favorite topics")?;
        let topic_count = self
            .favorite_repo
            .get_favorite_topic_count(user.user_id)
            .await
            .context("Failed to count favorite topics")?;
        let pager_context = PagerContext::new(topic_count, page_index, page_size);
        Ok((topics, pager_context))
    }

    pub async fn is_topic_favorite(&self, user_id: i64, topic_id: i64) -> Result<bool> {
        self.favorite_repo
            .is_topic_favorite(user_id, topic_id)
            .await
    }

    pub async fn add_favorite_topic(&self, user: &User, topic: &Topic) -> Result<()> {
        self.favorite_repo
            .add_favorite_topic(user.user_id, topic.topic_id)
            .await
    }

    pub async fn remove_favorite_topic(&self, user: &User, topic: &Topic) -> Result<()> {
        self.favorite_repo
            .remove_favorite_topic(user.user_id, topic.topic_id)
            .await
    }
}
