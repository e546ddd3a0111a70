//! User repository contract

use anyhow::Result;
use async_trait::async_trait;

use crate::models::User;

/// Read access to users; account lifecycle lives with the auth layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_users_from_ids(&self, user_ids: &[i64]) -> Result<Vec<User>>;
}
