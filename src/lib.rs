//! `ridership-stats` loads a transit ridership CSV into an in-memory [`types::Table`] and
//! computes average boardings per line, both over the whole day and per time-of-day bucket.
//!
//! The entrypoint is [`aggregate::run`], which loads the file named by a
//! [`config::RidershipConfig`] and returns a [`aggregate::RidershipSummary`]. The summary feeds
//! the text [`report`] and the [`charts`].
//!
//! ## Input
//!
//! A comma-delimited file with a header row. With the default layout the consumed columns are:
//!
//! - column 3: line name (`Green`, `Blue`, `Red`, `Orange`)
//! - column 8: time bucket (`time_period_01` … `time_period_11`)
//! - column 12: boardings
//!
//! Fields stay strings until they are consumed; a short row or a non-integer boardings value is
//! reported with its source line number.
//!
//! ## Example
//!
//! ```rust
//! use ridership_stats::aggregate::summarize;
//! use ridership_stats::config::{ColumnLayout, RidershipConfig};
//! use ridership_stats::types::Table;
//!
//! let config = RidershipConfig {
//!     columns: ColumnLayout { line: 0, time_bucket: 1, boardings_on: 2, boardings_off: 3 },
//!     lines: vec!["Green".to_string(), "Red".to_string()],
//!     time_buckets: vec!["time_period_01".to_string()],
//!     ..Default::default()
//! };
//! let table = Table::from_records([
//!     vec!["Green", "time_period_01", "10", "0"],
//!     vec!["Green", "time_period_01", "20", "0"],
//!     vec!["Red", "time_period_01", "5", "0"],
//! ]);
//!
//! let summary = summarize(&table, &config).unwrap();
//! assert_eq!(summary.overall, vec![15.0, 5.0]);
//! assert_eq!(summary.by_time[0].averages, vec![15.0, 5.0]);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading and load observers
//! - [`types`]: rows and tables
//! - [`processing`]: column extraction, averaging, bucketing
//! - [`aggregate`]: the driver producing a [`aggregate::RidershipSummary`]
//! - [`report`]: text output
//! - [`charts`]: chart models and the PNG renderer
//! - [`config`]: column layout and labels
//! - [`error`]: the shared error type

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{RidershipError, RidershipResult};
