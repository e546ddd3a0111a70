//! Service heartbeat repository contract

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::ServiceHeartbeat;

/// Persistence operations for background-service heartbeats.
#[async_trait]
pub trait ServiceHeartbeatRepository: Send + Sync {
    async fn record_heartbeat(
        &self,
        service_name: &str,
        machine_name: &str,
        last_run: DateTime<Utc>,
    ) -> Result<()>;

    async fn get_all(&self) -> Result<Vec<ServiceHeartbeat>>;

    async fn clear_all(&self) -> Result<()>;
}
