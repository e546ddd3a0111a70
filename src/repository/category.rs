//! Category repository contract

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Category;

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get(&self, category_id: i64) -> Result<Option<Category>>;

    async fn get_all(&self) -> Result<Vec<Category>>;

    /// Insert a category with the given title and initial sort order,
    /// returning the stored row with its assigned ID.
    async fn create(&self, title: &str, sort_order: i32) -> Result<Category>;

    async fn update(&self, category: &Category) -> Result<()>;

    async fn delete(&self, category_id: i64) -> Result<()>;
}
