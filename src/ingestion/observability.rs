//! Load outcome reporting.
//!
//! [`super::load_table`] reports exactly one outcome per call: a success with the row count, or
//! a failure classified as [`LoadSeverity::Error`] (bad content) or [`LoadSeverity::Critical`]
//! (the file could not be opened or read). Failures at or above the configured threshold are
//! additionally raised as alerts.

use std::path::PathBuf;

use crate::error::RidershipError;

/// How bad a load failure is. Ordered, so a threshold can be compared against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// The file was read but its content is unusable (bad CSV, invalid UTF-8).
    Error,
    /// The file is missing or unreadable.
    Critical,
}

impl LoadSeverity {
    /// Classify a load failure.
    pub fn for_error(e: &RidershipError) -> Self {
        match e {
            RidershipError::Io(_) => Self::Critical,
            RidershipError::Csv(err) if matches!(err.kind(), ::csv::ErrorKind::Io(_)) => {
                Self::Critical
            }
            _ => Self::Error,
        }
    }
}

/// The file a load was attempted on.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub path: PathBuf,
}

/// Reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows, header excluded.
    pub rows: usize,
}

/// Receives load outcomes. All methods default to doing nothing.
pub trait LoadObserver: Send + Sync {
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &RidershipError) {}

    /// Follows `on_failure` when `severity` reaches the alert threshold.
    fn on_alert(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &RidershipError) {}
}

/// Emits load outcomes as `tracing` events.
///
/// Failures log at `warn`; only alerts log at `error`, so one failed load yields at most one
/// error-level event.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::info!(path = %ctx.path.display(), rows = stats.rows, "loaded ridership table");
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &RidershipError) {
        tracing::warn!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "failed to load ridership table"
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &RidershipError) {
        tracing::error!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "ridership table unavailable"
        );
    }
}
