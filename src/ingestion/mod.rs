//! Table loading.
//!
//! Most callers should use [`load_table`], which:
//!
//! - reads a comma-delimited file into an in-memory [`crate::types::Table`] (header dropped)
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The raw reader functions live in [`csv`].

pub mod csv;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::RidershipResult;
use crate::types::Table;

pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver};

/// Options controlling [`load_table`].
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a ridership CSV from `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` with the row count
/// - `on_failure` with a computed severity
/// - `on_alert` when the severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use ridership_stats::ingestion::{load_table, LoadOptions, TracingObserver};
///
/// # fn main() -> Result<(), ridership_stats::RidershipError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let table = load_table("mbta_data.csv", &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_table(path: impl AsRef<Path>, options: &LoadOptions) -> RidershipResult<Table> {
    let path = path.as_ref();
    let result = csv::load_table_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(t) => obs.on_success(&ctx, LoadStats { rows: t.row_count() }),
            Err(e) => {
                let sev = LoadSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
