//! Services layer - Business logic
//!
//! One service per concern, each a thin orchestration layer that validates
//! inputs, applies the business rules, and delegates persistence to its
//! repository collaborators.

pub mod category;
pub mod favorite_topics;
pub mod forum_permission;
pub mod heartbeat;
pub mod image;
pub mod moderation_log;
pub mod profile;
pub mod sort_order;
pub mod subscribed_topics;
pub mod text_parsing;
pub mod time_format;
pub mod workers;

pub use category::{CategoryService, CategoryServiceError};
pub use favorite_topics::FavoriteTopicService;
pub use forum_permission::ForumPermissionService;
pub use heartbeat::ServiceHeartbeatService;
pub use image::ImageService;
pub use moderation_log::ModerationLogService;
pub use profile::{ProfileService, ProfileServiceError};
pub use sort_order::{
    rerank, SortOrdered, MOVE_DOWN_DELTA, MOVE_UP_DELTA, NEW_ENTRY_SORT_ORDER, SORT_ORDER_STEP,
};
pub use subscribed_topics::SubscribedTopicsService;
pub use text_parsing::TextParsingService;
pub use time_format::{TimeFormatStringService, TimeFormats};
pub use workers::{
    execute, spawn, CloseAgedTopicsWorker, ScheduledWorker, TopicAgingService, UserSessionService,
    UserSessionWorker,
};
