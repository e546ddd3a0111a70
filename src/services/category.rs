//! Category service
//!
//! Business logic for category management: titles, deletion (with forum
//! detachment), and maintenance of the dense sort order that positions
//! categories on the forum index.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::models::Category;
use crate::repository::{CategoryRepository, ForumRepository};
use crate::services::sort_order::{
    rerank, MOVE_DOWN_DELTA, MOVE_UP_DELTA, NEW_ENTRY_SORT_ORDER,
};

/// Error types for category service operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryServiceError {
    /// Category not found
    #[error("Category with ID {0} does not exist")]
    NotFound(i64),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Category service for managing forum categories
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
    forum_repo: Arc<dyn ForumRepository>,
}

impl CategoryService {
    /// Create a new category service
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        forum_repo: Arc<dyn ForumRepository>,
    ) -> Self {
        Self {
            category_repo,
            forum_repo,
        }
    }

    /// Get category by ID
    pub async fn get(&self, category_id: i64) -> Result<Option<Category>, CategoryServiceError> {
        self.category_repo
            .get(category_id)
            .await
            .context("Failed to get category")
            .map_err(Into::into)
    }

    /// List all categories
    pub async fn get_all(&self) -> Result<Vec<Category>, CategoryServiceError> {
        self.category_repo
            .get_all()
            .await
            .context("Failed to list categories")
            .map_err(Into::into)
    }

    /// Create a new category.
    ///
    /// The category is inserted with a synthetic sort order that places it
    /// ahead of every existing category, then one renormalization pass
    /// assigns it rank 0 and re-spaces the rest.
    pub async fn create(&self, title: &str) -> Result<Category, CategoryServiceError> {
        let mut category = self
            .category_repo
            .create(title, NEW_ENTRY_SORT_ORDER)
            .await
            .context("Failed to create category")?;
        self.change_sort_order(None, 0).await?;
        category.sort_order = 0;
        tracing::info!(category_id = category.category_id, title, "category created");
        Ok(category)
    }

    /// Delete a category.
    ///
    /// Forums belonging to the category are detached (left uncategorized),
    /// not deleted.
    ///
    /// # Errors
    /// - `NotFound` if the category doesn't exist
    pub async fn delete(&self, category_id: i64) -> Result<(), CategoryServiceError> {
        let category = self
            .category_repo
            .get(category_id)
            .await
            .context("Failed to get category")?
            .ok_or(CategoryServiceError::NotFound(category_id))?;

        let forums = self
            .forum_repo
            .get_all()
            .await
            .context("Failed to list forums")?;
        for forum in forums
            .iter()
            .filter(|f| f.category_id == Some(category.category_id))
        {
            self.forum_repo
                .update_category_association(forum.forum_id, None)
                .await
                .context("Failed to detach forum from category")?;
        }

        self.category_repo
            .delete(category.category_id)
            .await
            .context("Failed to delete category")?;
        tracing::info!(category_id, "category deleted");
        Ok(())
    }

    /// Rename a category.
    ///
    /// # Errors
    /// - `NotFound` if the category doesn't exist
    pub async fn update_title(
        &self,
        category_id: i64,
        new_title: &str,
    ) -> Result<(), CategoryServiceError> {
        let mut category = self
            .category_repo
            .get(category_id)
            .await
            .context("Failed to get category")?
            .ok_or(CategoryServiceError::NotFound(category_id))?;
        category.title = new_title.to_string();
        self.category_repo
            .update(&category)
            .await
            .context("Failed to update category")?;
        Ok(())
    }

    /// Move a category ahead of its previous neighbor.
    pub async fn move_up(&self, category_id: i64) -> Result<(), CategoryServiceError> {
        self.change_sort_order(Some(category_id), MOVE_UP_DELTA)
            .await
    }

    /// Move a category past its next neighbor.
    pub async fn move_down(&self, category_id: i64) -> Result<(), CategoryServiceError> {
        self.change_sort_order(Some(category_id), MOVE_DOWN_DELTA)
            .await
    }

    /// Apply a sort-order delta to one category (if given) and renormalize
    /// the whole set to the dense even sequence, persisting every row.
    ///
    /// # Errors
    /// - `NotFound` if `target` is not among the fetched categories; nothing
    ///   is persisted in that case, since renormalizing a partial set would
    ///   corrupt the ordering
    pub async fn change_sort_order(
        &self,
        target: Option<i64>,
        delta: i32,
    ) -> Result<(), CategoryServiceError> {
        let mut categories = self
            .category_repo
            .get_all()
            .await
            .context("Failed to list categories")?;

        if let Some(category_id) = target {
            let category = categories
                .iter_mut()
                .find(|c| c.category_id == category_id)
                .ok_or(CategoryServiceError::NotFound(category_id))?;
            category.sort_order += delta;
        }

        rerank(&mut categories);

        for category in &categories {
            self.category_repo
                .update(category)
                .await
                .context("Failed to persist category sort order")?;
        }
        Ok(())
    }
}
