//! Data models
//!
//! Entities owned by the repositories (Category, Forum, Topic, Post, User,
//! Profile, UserImage, moderation log rows) plus the ephemeral result types
//! the services compute (PermissionContext, PagerContext, notification
//! payloads).

mod category;
mod forum;
mod heartbeat;
mod image;
mod moderation;
mod notification;
mod pager;
mod permission;
mod post;
mod profile;
mod topic;
mod user;

pub use category::Category;
pub use forum::Forum;
pub use heartbeat::ServiceHeartbeat;
pub use image::{UserImage, UserImageApprovalContainer, UserImagePair};
pub use moderation::{ModerationLogEntry, ModerationType};
pub use notification::SubscribeNotificationPayload;
pub use pager::PagerContext;
pub use permission::{DenialReason, PermissionContext};
pub use post::Post;
pub use profile::{Profile, UserEditProfile};
pub use topic::Topic;
pub use user::{permanent_roles, User};
