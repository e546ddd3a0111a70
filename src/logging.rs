//! Error log sink
//!
//! Background workers terminate their failures here instead of propagating
//! them to the scheduling host. User-facing services never log-and-swallow;
//! they return errors to the caller.

use std::fmt;

/// Severity attached to a logged error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Information,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorSeverity::Information => "Information",
            ErrorSeverity::Warning => "Warning",
            ErrorSeverity::Error => "Error",
            ErrorSeverity::Critical => "Critical",
        };
        f.write_str(name)
    }
}

/// Sink accepting `(error, severity)` pairs from background workers.
pub trait ErrorLog: Send + Sync {
    fn log(&self, error: &anyhow::Error, severity: ErrorSeverity);
}

/// Error log that forwards to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log(&self, error: &anyhow::Error, severity: ErrorSeverity) {
        match severity {
            ErrorSeverity::Information => tracing::info!(error = %error, "worker error"),
            ErrorSeverity::Warning => tracing::warn!(error = %error, "worker error"),
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                tracing::error!(error = %error, severity = %severity, "worker error")
            }
        }
    }
}
