//! Background maintenance workers
//!
//! Each worker wraps one maintenance operation (expired-session cleanup,
//! aged-topic closing) owned by a collaborator service. `run_once` returns
//! the operation's result so tests and callers can observe failures; the
//! `execute` scheduler entry point is fire-and-forget — it terminates any
//! error in the error-log sink so the scheduling host never sees it.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::logging::{ErrorLog, ErrorSeverity};

/// Collaborator that purges expired user sessions.
#[async_trait]
pub trait UserSessionService: Send + Sync {
    async fn cleanup_expired_sessions(&self) -> Result<()>;
}

/// Collaborator that closes topics past the configured age.
#[async_trait]
pub trait TopicAgingService: Send + Sync {
    async fn close_aged_topics(&self) -> Result<()>;
}

/// A scheduled maintenance operation.
#[async_trait]
pub trait ScheduledWorker: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// One run of the operation; errors propagate to the scheduler.
    async fn run_once(&self) -> Result<()>;
}

/// Run a worker once, logging any failure instead of propagating it.
pub async fn execute(worker: &dyn ScheduledWorker, error_log: &dyn ErrorLog) {
    tracing::debug!(worker = worker.name(), "worker run starting");
    if let Err(error) = worker.run_once().await {
        error_log.log(&error, ErrorSeverity::Error);
    }
}

/// Run a worker once on a detached task. The caller is never blocked and
/// never sees the outcome; failures land in the error log.
pub fn spawn(
    worker: Arc<dyn ScheduledWorker>,
    error_log: Arc<dyn ErrorLog>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move { execute(worker.as_ref(), error_log.as_ref()).await })
}

/// Cleans up expired user sessions.
pub struct UserSessionWorker {
    session_service: Arc<dyn UserSessionService>,
}

impl UserSessionWorker {
    pub fn new(session_service: Arc<dyn UserSessionService>) -> Self {
        Self { session_service }
    }
}

#[async_trait]
impl ScheduledWorker for UserSessionWorker {
    fn name(&self) -> &'static str {
        "user-session-cleanup"
    }

    async fn run_once(&self) -> Result<()> {
        self.session_service.cleanup_expired_sessions().await
    }
}

/// Closes topics that have aged past their activity window.
pub struct CloseAgedTopicsWorker {
    topic_service: Arc<dyn TopicAgingService>,
}

impl CloseAgedTopicsWorker {
    pub fn new(topic_service: Arc<dyn TopicAgingService>) -> Self {
        Self { topic_service }
    }
}

#[async_trait]
impl ScheduledWorker for CloseAgedTopicsWorker {
    fn name(&self) -> &'static str {
        "close-aged-topics"
    }

    async fn run_once(&self) -> Result<()> {
        self.topic_service.close_aged_topics().await
    }
}
