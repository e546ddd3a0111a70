//! Subscription notification payload

use serde::{Deserialize, Serialize};

/// Payload enqueued for asynchronous fan-out to topic subscribers.
///
/// The service layer only enqueues; delivery happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeNotificationPayload {
    pub topic_id: i64,
    pub topic_title: String,
    pub posting_user_id: i64,
    pub posting_user_name: String,
    pub tenant_id: String,
}
