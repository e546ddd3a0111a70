//! Service heartbeat model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last-seen record for a background service instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHeartbeat {
    pub service_name: String,
    pub machine_name: String,
    pub last_run: DateTime<Utc>,
}
