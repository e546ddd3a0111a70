//! Avatar and user-image repository contracts

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::UserImage;

/// Persistence operations for avatar images.
#[async_trait]
pub trait UserAvatarRepository: Send + Sync {
    async fn get_image_data(&self, user_avatar_id: i64) -> Result<Option<Vec<u8>>>;

    async fn get_last_modification_date(
        &self,
        user_avatar_id: i64,
    ) -> Result<Option<DateTime<Utc>>>;
}

/// Persistence operations for full-size user images.
#[async_trait]
pub trait UserImageRepository: Send + Sync {
    async fn get(&self, user_image_id: i64) -> Result<Option<UserImage>>;

    async fn get_image_data(&self, user_image_id: i64) -> Result<Option<Vec<u8>>>;

    /// `None` when the image does not exist.
    async fn is_user_image_approved(&self, user_image_id: i64) -> Result<Option<bool>>;

    async fn approve_user_image(&self, user_image_id: i64) -> Result<()>;

    async fn delete_user_image(&self, user_image_id: i64) -> Result<()>;

    async fn get_unapproved_user_images(&self) -> Result<Vec<UserImage>>;

    async fn get_last_modification_date(
        &self,
        user_image_id: i64,
    ) -> Result<Option<DateTime<Utc>>>;
}
