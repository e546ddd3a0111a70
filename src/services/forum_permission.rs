//! Forum permission evaluation
//!
//! Computes a caller's view/post/moderate rights for a forum, optionally
//! narrowed by a specific topic. The result is rebuilt from scratch on every
//! call; nothing here is cached or persisted.
//!
//! The rules run in a fixed order and later rules overwrite earlier ones
//! (last write wins, not short-circuit). Denial reasons accumulate as
//! ordered tags; the closed-topic rule is the single rule that replaces the
//! accumulated list instead of appending to it, and the UI depends on that.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::models::{permanent_roles, DenialReason, Forum, PermissionContext, Topic, User};
use crate::repository::ForumRepository;

/// Stateless permission evaluator over the forum repository's role lists.
pub struct ForumPermissionService {
    forum_repo: Arc<dyn ForumRepository>,
}

impl ForumPermissionService {
    /// Create a new permission service
    pub fn new(forum_repo: Arc<dyn ForumRepository>) -> Self {
        Self { forum_repo }
    }

    /// Evaluate permissions for a forum alone.
    pub async fn get_permission_context(
        &self,
        forum: &Forum,
        user: Option<&User>,
    ) -> Result<PermissionContext> {
        self.get_permission_context_for_topic(forum, user, None)
            .await
    }

    /// Evaluate permissions for a forum, narrowed by a topic when one is
    /// supplied. A missing topic skips the topic-state rules entirely.
    pub async fn get_permission_context_for_topic(
        &self,
        forum: &Forum,
        user: Option<&User>,
        topic: Option<&Topic>,
    ) -> Result<PermissionContext> {
        let mut context = PermissionContext::default();
        let view_restriction_roles = self
            .forum_repo
            .get_forum_view_roles(forum.forum_id)
            .await
            .context("Failed to get forum view roles")?;
        let post_restriction_roles = self
            .forum_repo
            .get_forum_post_roles(forum.forum_id)
            .await
            .context("Failed to get forum post roles")?;

        // View eligibility: no restriction roles means everyone, including
        // anonymous callers, can view.
        if view_restriction_roles.is_empty() {
            context.user_can_view = true;
        } else {
            context.user_can_view = match user {
                Some(user) => view_restriction_roles.iter().any(|r| user.is_in_role(r)),
                None => false,
            };
        }

        // Post eligibility baseline.
        match user {
            None => context.deny_post(DenialReason::MustLogInToPost),
            Some(_) if !context.user_can_view => {
                context.deny_post(DenialReason::MustLogInToPost)
            }
            Some(user) if !user.is_approved => {
                context.deny_post(DenialReason::AccountNotVerified)
            }
            Some(user) => {
                if post_restriction_roles.is_empty()
                    || post_restriction_roles.iter().any(|r| user.is_in_role(r))
                {
                    context.user_can_post = true;
                } else {
                    context.deny_post(DenialReason::NoForumPostPermission);
                }
            }
        }

        // Topic-state overrides. The closed rule replaces the accumulated
        // reasons; the deleted rule appends and additionally revokes view
        // for non-moderators.
        if let Some(topic) = topic {
            if topic.is_closed {
                context.deny_post_replacing(DenialReason::TopicClosed);
            }
            if topic.is_deleted {
                let is_moderator = user
                    .map(|u| u.is_in_role(permanent_roles::MODERATOR))
                    .unwrap_or(false);
                if !is_moderator {
                    context.user_can_view = false;
                }
                context.denial_reasons.push(DenialReason::TopicDeleted);
            }
        }

        // Archived forums accept no posts from anyone.
        if forum.is_archived {
            context.deny_post(DenialReason::ForumArchived);
        }

        // Moderation capability is independent of the rules above.
        context.user_can_moderate = user
            .map(|u| {
                u.is_in_role(permanent_roles::ADMIN) || u.is_in_role(permanent_roles::MODERATOR)
            })
            .unwrap_or(false);

        Ok(context)
    }
}
