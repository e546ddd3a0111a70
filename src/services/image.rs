//! Image service
//!
//! Avatar and user-image lookups, the moderation approval queue, and the
//! constrain/crop resize used when accepting uploads. Decoding, resizing,
//! and re-encoding delegate to the `image` crate.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::config::SettingsManager;
use crate::models::{UserImage, UserImageApprovalContainer, UserImagePair};
use crate::repository::{UserAvatarRepository, UserImageRepository, UserRepository};
use crate::services::profile::ProfileService;

pub struct ImageService {
    user_avatar_repo: Arc<dyn UserAvatarRepository>,
    user_image_repo: Arc<dyn UserImageRepository>,
    profile_service: Arc<ProfileService>,
    user_repo: Arc<dyn UserRepository>,
    settings_manager: Arc<dyn SettingsManager>,
}

impl ImageService {
    pub fn new(
        user_avatar_repo: Arc<dyn UserAvatarRepository>,
        user_image_repo: Arc<dyn UserImageRepository>,
        profile_service: Arc<ProfileService>,
        user_repo: Arc<dyn UserRepository>,
        settings_manager: Arc<dyn SettingsManager>,
    ) -> Self {
        Self {
            user_avatar_repo,
            user_image_repo,
            profile_service,
            user_repo,
            settings_manager,
        }
    }

    /// `None` when the image does not exist.
    pub async fn is_user_image_approved(&self, user_image_id: i64) -> Result<Option<bool>> {
        self.user_image_repo
            .is_user_image_approved(user_image_id)
            .await
    }

    pub async fn get_user_image(&self, user_image_id: i64) -> Result<Option<UserImage>> {
        self.user_image_repo.get(user_image_id).await
    }

    pub async fn approve_user_image(&self, user_image_id: i64) -> Result<()> {
        self.user_image_repo
            .approve_user_image(user_image_id)
            .await?;
        tracing::info!(user_image_id, "user image approved");
        Ok(())
    }

    /// Delete a user image, clearing the owner's current-image pointer
    /// first so the profile never references a missing image.
    pub async fn delete_user_image(&self, user_image_id: i64) -> Result<()> {
        if let Some(user_image) = self.user_image_repo.get(user_image_id).await? {
            self.profile_service
                .set_current_image_id_to_null(user_image.user_id)
                .await?;
        }
        self.user_image_repo.delete_user_image(user_image_id).await
    }

    pub async fn get_avatar_image_data(&self, user_avatar_id: i64) -> Result<Option<Vec<u8>>> {
        self.user_avatar_repo.get_image_data(user_avatar_id).await
    }

    pub async fn get_user_image_data(&self, user_image_id: i64) -> Result<Option<Vec<u8>>> {
        self.user_image_repo.get_image_data(user_image_id).await
    }

    pub async fn get_avatar_image_last_modification(
        &self,
        user_avatar_id: i64,
    ) -> Result<Option<DateTime<Utc>>> {
        self.user_avatar_repo
            .get_last_modification_date(user_avatar_id)
            .await
    }

    pub async fn get_user_image_last_modification(
        &self,
        user_image_id: i64,
    ) -> Result<Option<DateTime<Utc>>> {
        self.user_image_repo
            .get_last_modification_date(user_image_id)
            .await
    }

    pub async fn get_unapproved_user_images(&self) -> Result<Vec<UserImage>> {
        self.user_image_repo.get_unapproved_user_images().await
    }

    /// The approval queue joined with its owners, plus the auto-approval
    /// setting the moderation screen displays.
    pub async fn get_unapproved_container(&self) -> Result<UserImageApprovalContainer> {
        let is_new_user_image_approved = self.settings_manager.current().is_new_user_image_approved;
        let unapproved = self.get_unapproved_user_images().await?;
        let user_ids: Vec<i64> = unapproved.iter().map(|i| i.user_id).collect();
        let users = self
            .user_repo
            .get_users_from_ids(&user_ids)
            .await
            .context("Failed to load image owners")?;

        let mut pairs = Vec::with_capacity(unapproved.len());
        for user_image in unapproved {
            let user = users
                .iter()
                .find(|u| u.user_id == user_image.user_id)
                .ok_or_else(|| {
                    anyhow!("No user found for unapproved image {}", user_image.user_image_id)
                })?
                .clone();
            pairs.push(UserImagePair { user, user_image });
        }
        Ok(UserImageApprovalContainer {
            unapproved: pairs,
            is_new_user_image_approved,
        })
    }

    /// Resize image bytes to fit within the given bounds.
    ///
    /// Bytes already within bounds are returned unchanged, original format
    /// included. Otherwise the image is resized (cropped to exactly
    /// max dimensions when `crop_instead_of_constrain`, proportionally
    /// fitted otherwise), lightly sharpened, and re-encoded as JPEG at the
    /// given quality.
    pub fn constrain_resize(
        &self,
        bytes: &[u8],
        max_width: u32,
        max_height: u32,
        quality_level: u8,
        crop_instead_of_constrain: bool,
    ) -> Result<Vec<u8>> {
        let img = image::load_from_memory(bytes).context("Failed to decode image")?;
        if img.width() <= max_width && img.height() <= max_height {
            return Ok(bytes.to_vec());
        }

        let resized = if crop_instead_of_constrain {
            img.resize_to_fill(max_width, max_height, FilterType::Lanczos3)
        } else {
            img.resize(max_width, max_height, FilterType::Lanczos3)
        };
        let sharpened = resized.unsharpen(0.5, 2);

        let mut output = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut output, quality_level);
        encoder
            .encode_image(&sharpened.to_rgb8())
            .context("Failed to encode resized image")?;
        Ok(output)
    }
}
