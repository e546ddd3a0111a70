//! Profile repository contracts

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Profile;

/// Persistence operations for user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>>;

    async fn create(&self, profile: &Profile) -> Result<()>;

    /// Returns false when no profile exists for the given user.
    async fn update(&self, profile: &Profile) -> Result<bool>;

    /// Signatures keyed by user ID, for the given users.
    async fn get_signatures(&self, user_ids: &[i64]) -> Result<HashMap<i64, String>>;

    /// Current avatar IDs keyed by user ID, for the given users.
    async fn get_avatars(&self, user_ids: &[i64]) -> Result<HashMap<i64, i64>>;

    async fn set_current_image_id_to_null(&self, user_id: i64) -> Result<()>;

    async fn update_points(&self, user_id: i64, points: i32) -> Result<()>;
}

/// Read access to the point ledger; the profile service caches the total on
/// the profile row.
#[async_trait]
pub trait PointLedgerRepository: Send + Sync {
    async fn get_point_total(&self, user_id: i64) -> Result<i32>;
}
