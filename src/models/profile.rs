//! Profile models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user profile data, keyed by user ID.
///
/// The signature is stored as full HTML; the profile service converts it to
/// and from editable forms through the text-parsing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    /// Owning user ID
    pub user_id: i64,
    /// Subscribed to mailing/digest email
    pub is_subscribed: bool,
    /// Stored signature HTML
    pub signature: String,
    /// Show profile details publicly
    pub show_details: bool,
    /// Free-form location text
    pub location: Option<String>,
    /// Author composes in plain forum code rather than rich text
    pub is_plain_text: bool,
    /// Date of birth
    pub dob: Option<NaiveDate>,
    /// Personal web link
    pub web: Option<String>,
    /// Instagram handle
    pub instagram: Option<String>,
    /// Facebook handle
    pub facebook: Option<String>,
    /// Hide post-count vanity
    pub hide_vanity: bool,
    /// Automatically follow topics the user replies to
    pub is_auto_follow_on_reply: bool,
    /// Cached point total from the point ledger
    pub points: i32,
    /// Currently selected user image, if any
    pub current_image_id: Option<i64>,
}

/// Editable view of a profile, as submitted from the edit form.
///
/// The signature here is in the user's editing format (forum code or client
/// HTML), not the stored HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserEditProfile {
    pub signature: String,
    pub is_subscribed: bool,
    pub show_details: bool,
    pub location: Option<String>,
    pub is_plain_text: bool,
    pub dob: Option<NaiveDate>,
    pub web: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub hide_vanity: bool,
    pub is_auto_follow_on_reply: bool,
}
