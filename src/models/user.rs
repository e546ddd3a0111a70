//! User model

use serde::{Deserialize, Serialize};

/// Role names with hardwired meaning in permission evaluation.
pub mod permanent_roles {
    pub const ADMIN: &str = "Admin";
    pub const MODERATOR: &str = "Moderator";
}

/// A forum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub user_id: i64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Unapproved accounts cannot post
    pub is_approved: bool,
    /// Role names granted to the user
    pub roles: Vec<String>,
}

impl User {
    /// Capability check used by permission evaluation.
    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
