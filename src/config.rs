//! Dataset layout and run configuration.
//!
//! [`RidershipConfig::default`] describes the MBTA ridership export: lines in column 3, time
//! buckets in column 8, boardings in column 12. Tests substitute their own layout with
//! struct-update syntax.

use std::path::PathBuf;

/// Number of time-of-day buckets in a service day.
pub const TIME_BUCKET_COUNT: usize = 11;

/// Buckets per labelled super-period on the time chart's x-axis.
pub const BUCKETS_PER_PERIOD: usize = 3;

/// Zero-based column indices consumed from each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Line / route name.
    pub line: usize,
    /// Time-of-day bucket identifier.
    pub time_bucket: usize,
    /// Boardings (riders getting on).
    pub boardings_on: usize,
    /// Alightings (riders getting off). Not used by the aggregation driver.
    pub boardings_off: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            line: 3,
            time_bucket: 8,
            boardings_on: 12,
            boardings_off: 13,
        }
    }
}

/// Everything a run needs besides the data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RidershipConfig {
    /// Input CSV.
    pub data_path: PathBuf,
    /// Column indices.
    pub columns: ColumnLayout,
    /// Line labels to aggregate, in report order.
    pub lines: Vec<String>,
    /// Time bucket labels, in chronological order.
    pub time_buckets: Vec<String>,
    /// x-axis labels for the time chart, one per [`BUCKETS_PER_PERIOD`] buckets.
    pub period_labels: Vec<String>,
    /// Where the PNG renderer writes the per-line bar chart.
    pub bar_chart_path: PathBuf,
    /// Where the PNG renderer writes the time-of-day line chart.
    pub time_chart_path: PathBuf,
}

impl Default for RidershipConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("mbta_data.csv"),
            columns: ColumnLayout::default(),
            lines: ["Green", "Blue", "Red", "Orange"]
                .into_iter()
                .map(String::from)
                .collect(),
            time_buckets: default_time_buckets(),
            period_labels: ["Early morning", "Midday", "PM Peak", "Night"]
                .into_iter()
                .map(String::from)
                .collect(),
            bar_chart_path: PathBuf::from("ridership_by_line.png"),
            time_chart_path: PathBuf::from("ridership_by_time.png"),
        }
    }
}

/// `time_period_01` through `time_period_11`.
pub fn default_time_buckets() -> Vec<String> {
    (1..=TIME_BUCKET_COUNT)
        .map(|i| format!("time_period_{i:02}"))
        .collect()
}
