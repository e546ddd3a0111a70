//! Forum repository contract

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Forum;

/// Persistence operations for forums, including the role lists consulted by
/// permission evaluation. The role lists live with the repository, not on
/// the `Forum` entity.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    async fn get(&self, forum_id: i64) -> Result<Option<Forum>>;

    async fn get_all(&self) -> Result<Vec<Forum>>;

    /// Roles allowed to view the forum; empty means unrestricted.
    async fn get_forum_view_roles(&self, forum_id: i64) -> Result<Vec<String>>;

    /// Roles allowed to post in the forum; empty means unrestricted.
    async fn get_forum_post_roles(&self, forum_id: i64) -> Result<Vec<String>>;

    /// Re-home a forum under a category, or detach it with `None`.
    async fn update_category_association(
        &self,
        forum_id: i64,
        category_id: Option<i64>,
    ) -> Result<()>;
}
