//! Permission evaluation result types
//!
//! `PermissionContext` is computed per request by the forum permission
//! service and never persisted. Denial reasons are kept as an ordered list of
//! structured tags so callers can branch on codes; `denial_reason()` renders
//! the display string the UI concatenates.

use serde::{Deserialize, Serialize};

/// Why posting (or viewing) was denied.
///
/// Tags accumulate in rule order. Most rules append; the closed-topic rule
/// replaces the whole list. That asymmetry is load-bearing: the UI expects
/// a closed topic to show only the "closed" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DenialReason {
    /// Anonymous caller, or caller who cannot view the forum
    MustLogInToPost,
    /// Account exists but has not been verified
    AccountNotVerified,
    /// Forum restricts posting to roles the user does not hold
    NoForumPostPermission,
    /// Topic is closed to new posts
    TopicClosed,
    /// Topic has been deleted
    TopicDeleted,
    /// Forum is archived
    ForumArchived,
}

impl DenialReason {
    /// Display fragment for this tag. Fragments end with a period so joined
    /// output reads as sentences.
    pub fn message(&self) -> &'static str {
        match self {
            DenialReason::MustLogInToPost => "You must be logged in to post.",
            DenialReason::AccountNotVerified => {
                "You can't post until you have verified your account."
            }
            DenialReason::NoForumPostPermission => {
                "You don't have permission to post in this forum."
            }
            DenialReason::TopicClosed => "Closed.",
            DenialReason::TopicDeleted => "Topic is deleted.",
            DenialReason::ForumArchived => "Archived.",
        }
    }
}

/// Computed view/post/moderate rights for one user against one forum (and
/// optionally one topic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PermissionContext {
    pub user_can_view: bool,
    pub user_can_post: bool,
    pub user_can_moderate: bool,
    /// Denial tags in the order the rules produced them
    pub denial_reasons: Vec<DenialReason>,
}

impl PermissionContext {
    /// Deny posting and append a reason tag.
    pub fn deny_post(&mut self, reason: DenialReason) {
        self.user_can_post = false;
        self.denial_reasons.push(reason);
    }

    /// Deny posting and replace all accumulated reasons with this one.
    pub fn deny_post_replacing(&mut self, reason: DenialReason) {
        self.user_can_post = false;
        self.denial_reasons.clear();
        self.denial_reasons.push(reason);
    }

    /// Joined display string for the accumulated reasons.
    pub fn denial_reason(&self) -> String {
        self.denial_reasons
            .iter()
            .map(|r| r.message())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
