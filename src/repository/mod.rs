//! Repository contracts
//!
//! External collaborator interfaces the services delegate persistence to.
//! Each trait covers CRUD primitives for one entity; implementations (SQL,
//! in-memory, whatever the embedder provides) live outside this crate.

pub mod category;
pub mod favorite;
pub mod forum;
pub mod heartbeat;
pub mod image;
pub mod moderation;
pub mod profile;
pub mod subscription;
pub mod user;

pub use category::CategoryRepository;
pub use favorite::FavoriteTopicsRepository;
pub use forum::ForumRepository;
pub use heartbeat::ServiceHeartbeatRepository;
pub use image::{UserAvatarRepository, UserImageRepository};
pub use moderation::ModerationLogRepository;
pub use profile::{PointLedgerRepository, ProfileRepository};
pub use subscription::{SubscribeNotificationRepository, SubscribedTopicsRepository};
pub use user::UserRepository;
