//! Post model

use serde::{Deserialize, Serialize};

/// A single post within a topic.
///
/// Only the fields the service layer reads are modeled here; post bodies and
/// rendering belong to the posting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub post_id: i64,
    /// Topic the post belongs to
    pub topic_id: i64,
    /// Author user ID
    pub user_id: i64,
    /// Whether the author's signature is shown under the post
    pub show_sig: bool,
}
