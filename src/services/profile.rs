//! Profile service
//!
//! Profile reads and edits, signature format conversion through the
//! text-parsing collaborator, avatar/signature lookups for post rendering,
//! the email unsubscribe hash, and point-total maintenance.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use data_encoding::BASE64;
use sha2::{Digest, Sha256};

use crate::models::{Post, Profile, User, UserEditProfile};
use crate::repository::{PointLedgerRepository, ProfileRepository};
use crate::services::text_parsing::TextParsingService;

/// Error types for profile service operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    /// No profile exists for the user
    #[error("No profile found for UserID {0}")]
    NotFound(i64),

    /// Profile not associated with a valid user
    #[error("Can't create a profile not associated with a valid UserID")]
    MissingUser,

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
    text_parsing: Arc<dyn TextParsingService>,
    point_ledger_repo: Arc<dyn PointLedgerRepository>,
}

impl ProfileService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        text_parsing: Arc<dyn TextParsingService>,
        point_ledger_repo: Arc<dyn PointLedgerRepository>,
    ) -> Self {
        Self {
            profile_repo,
            text_parsing,
            point_ledger_repo,
        }
    }

    /// Get a user's profile
    pub async fn get_profile(&self, user: &User) -> Result<Option<Profile>, ProfileServiceError> {
        self.profile_repo
            .get_profile(user.user_id)
            .await
            .context("Failed to get profile")
            .map_err(Into::into)
    }

    /// Get a profile with its signature converted to the user's editing
    /// format: forum code for plain-text editors (or when forced), client
    /// HTML otherwise.
    pub async fn get_profile_for_edit(
        &self,
        user: &User,
        force_plain_text: bool,
    ) -> Result<UserEditProfile, ProfileServiceError> {
        let profile = self
            .profile_repo
            .get_profile(user.user_id)
            .await
            .context("Failed to get profile")?
            .ok_or(ProfileServiceError::NotFound(user.user_id))?;

        let signature = if profile.signature.trim().is_empty() {
            String::new()
        } else if profile.is_plain_text || force_plain_text {
            self.text_parsing.html_to_forum_code(&profile.signature)
        } else {
            self.text_parsing.html_to_client_html(&profile.signature)
        };

        Ok(UserEditProfile {
            signature,
            is_subscribed: profile.is_subscribed,
            show_details: profile.show_details,
            location: profile.location,
            is_plain_text: profile.is_plain_text,
            dob: profile.dob,
            web: profile.web,
            instagram: profile.instagram,
            facebook: profile.facebook,
            hide_vanity: profile.hide_vanity,
            is_auto_follow_on_reply: profile.is_auto_follow_on_reply,
        })
    }

    /// Apply an edit form to the stored profile. The submitted signature is
    /// converted back to stored HTML according to the profile's existing
    /// plain-text preference.
    pub async fn edit_user_profile(
        &self,
        user: &User,
        edit: &UserEditProfile,
    ) -> Result<(), ProfileServiceError> {
        let mut profile = self
            .profile_repo
            .get_profile(user.user_id)
            .await
            .context("Failed to get profile")?
            .ok_or(ProfileServiceError::NotFound(user.user_id))?;

        profile.signature = if profile.is_plain_text {
            self.text_parsing.forum_code_to_html(&edit.signature)
        } else {
            self.text_parsing.client_html_to_html(&edit.signature)
        };
        profile.is_subscribed = edit.is_subscribed;
        profile.show_details = edit.show_details;
        profile.is_plain_text = edit.is_plain_text;
        profile.hide_vanity = edit.hide_vanity;
        profile.location = edit.location.clone();
        profile.dob = edit.dob;
        profile.web = edit.web.clone();
        profile.instagram = edit.instagram.clone();
        profile.facebook = edit.facebook.clone();
        profile.is_auto_follow_on_reply = edit.is_auto_follow_on_reply;

        self.profile_repo
            .update(&profile)
            .await
            .context("Failed to update profile")?;
        tracing::debug!(user_id = user.user_id, "profile edited");
        Ok(())
    }

    /// Create a profile.
    ///
    /// # Errors
    /// - `MissingUser` if the profile carries no user ID
    pub async fn create(&self, profile: &Profile) -> Result<(), ProfileServiceError> {
        if profile.user_id == 0 {
            return Err(ProfileServiceError::MissingUser);
        }
        self.profile_repo
            .create(profile)
            .await
            .context("Failed to create profile")
            .map_err(Into::into)
    }

    /// Update a profile, trimming the stored signature.
    ///
    /// # Errors
    /// - `NotFound` if no profile exists for the profile's user ID
    pub async fn update(&self, profile: &Profile) -> Result<(), ProfileServiceError> {
        let mut profile = profile.clone();
        profile.signature = profile.signature.trim().to_string();
        let updated = self
            .profile_repo
            .update(&profile)
            .await
            .context("Failed to update profile")?;
        if !updated {
            return Err(ProfileServiceError::NotFound(profile.user_id));
        }
        Ok(())
    }

    /// Signatures for the authors of the given posts, restricted to posts
    /// that display signatures.
    pub async fn get_signatures(
        &self,
        posts: &[Post],
    ) -> Result<HashMap<i64, String>, ProfileServiceError> {
        let mut user_ids: Vec<i64> = posts
            .iter()
            .filter(|p| p.show_sig)
            .map(|p| p.user_id)
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        self.profile_repo
            .get_signatures(&user_ids)
            .await
            .context("Failed to get signatures")
            .map_err(Into::into)
    }

    /// Current avatar IDs for the authors of the given posts.
    pub async fn get_avatars(
        &self,
        posts: &[Post],
    ) -> Result<HashMap<i64, i64>, ProfileServiceError> {
        let mut user_ids: Vec<i64> = posts.iter().map(|p| p.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        self.profile_repo
            .get_avatars(&user_ids)
            .await
            .context("Failed to get avatars")
            .map_err(Into::into)
    }

    pub async fn set_current_image_id_to_null(
        &self,
        user_id: i64,
    ) -> Result<(), ProfileServiceError> {
        self.profile_repo
            .set_current_image_id_to_null(user_id)
            .await
            .context("Failed to clear current image")
            .map_err(Into::into)
    }

    /// Hash embedded in unsubscribe links: SHA-256 over name+email, base64
    /// with the URL-hostile `+` and `=` characters stripped.
    pub fn get_unsubscribe_hash(&self, user: &User) -> String {
        let source = format!("{}{}", user.name, user.email);
        let digest = Sha256::digest(source.as_bytes());
        BASE64.encode(&digest).replace(['+', '='], "")
    }

    /// Process an unsubscribe link. Returns false for a bad hash.
    pub async fn unsubscribe(
        &self,
        user: &User,
        hash: &str,
    ) -> Result<bool, ProfileServiceError> {
        let calculated_hash = self.get_unsubscribe_hash(user);
        if calculated_hash != hash {
            return Ok(false);
        }
        let mut profile = self
            .get_profile(user)
            .await?
            .ok_or(ProfileServiceError::NotFound(user.user_id))?;
        profile.is_subscribed = false;
        self.update(&profile).await?;
        Ok(true)
    }

    /// Recompute the user's point total from the ledger and cache it on the
    /// profile row.
    pub async fn update_point_total(&self, user: &User) -> Result<(), ProfileServiceError> {
        let total = self
            .point_ledger_repo
            .get_point_total(user.user_id)
            .await
            .context("Failed to get point total")?;
        self.profile_repo
            .update_points(user.user_id, total)
            .await
            .context("Failed to update points")
            .map_err(Into::into)
    }
}
