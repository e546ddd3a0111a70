//! User image models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// A user-uploaded image awaiting or past moderation approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImage {
    /// Unique identifier
    pub user_image_id: i64,
    /// Owning user
    pub user_id: i64,
    /// Whether a moderator has approved the image
    pub is_approved: bool,
    /// Upload time
    pub time_stamp: DateTime<Utc>,
}

/// An unapproved image joined with its owner, for the moderation queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImagePair {
    pub user: User,
    pub user_image: UserImage,
}

/// Everything the image-approval screen needs in one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImageApprovalContainer {
    pub unapproved: Vec<UserImagePair>,
    /// Whether newly uploaded images are auto-approved per current settings
    pub is_new_user_image_approved: bool,
}
