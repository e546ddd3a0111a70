//! Service heartbeat service

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use crate::models::ServiceHeartbeat;
use crate::repository::ServiceHeartbeatRepository;

/// Records last-seen timestamps for background service instances so the
/// admin screen can flag ones that have gone quiet.
pub struct ServiceHeartbeatService {
    heartbeat_repo: Arc<dyn ServiceHeartbeatRepository>,
}

impl ServiceHeartbeatService {
    pub fn new(heartbeat_repo: Arc<dyn ServiceHeartbeatRepository>) -> Self {
        Self { heartbeat_repo }
    }

    pub async fn record_heartbeat(&self, service_name: &str, machine_name: &str) -> Result<()> {
        self.heartbeat_repo
            .record_heartbeat(service_name, machine_name, Utc::now())
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<ServiceHeartbeat>> {
        self.heartbeat_repo.get_all().await
    }

    pub async fn clear_all(&self) -> Result<()> {
        self.heartbeat_repo.clear_all().await
    }
}
