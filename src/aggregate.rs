//! Aggregation driver: per-line averages over the whole table and per time bucket.

use crate::config::RidershipConfig;
use crate::error::RidershipResult;
use crate::ingestion::{load_table, LoadOptions};
use crate::processing::{average_for_label, split_by_bucket};
use crate::types::Table;

/// Averages for every configured line within one time bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketAverages {
    /// Bucket label, e.g. `time_period_03`.
    pub bucket: String,
    /// One value per configured line, in line order. `NaN` where the line had no rows.
    pub averages: Vec<f64>,
}

/// Output of [`summarize`].
#[derive(Debug, Clone, PartialEq)]
pub struct RidershipSummary {
    /// Line labels, in the order used by every other field.
    pub lines: Vec<String>,
    /// Average boardings per line over the whole table.
    pub overall: Vec<f64>,
    /// Per-bucket averages, in chronological bucket order.
    pub by_time: Vec<BucketAverages>,
}

impl RidershipSummary {
    /// One line's averages across all buckets, in bucket order.
    pub fn series_for_line(&self, line_idx: usize) -> Vec<f64> {
        self.by_time
            .iter()
            .map(|b| b.averages.get(line_idx).copied().unwrap_or(f64::NAN))
            .collect()
    }

    /// `(label, overall average)` pairs in line order.
    pub fn overall_by_line(&self) -> impl Iterator<Item = (&str, f64)> {
        self.lines
            .iter()
            .map(String::as_str)
            .zip(self.overall.iter().copied())
    }
}

/// Compute overall and per-bucket averages for every configured line.
///
/// A line with no rows in the whole table is an error. A line with no rows in a single bucket
/// is recorded as `NaN` for that cell.
pub fn summarize(table: &Table, config: &RidershipConfig) -> RidershipResult<RidershipSummary> {
    let cols = config.columns;

    let overall = config
        .lines
        .iter()
        .map(|line| average_for_label(table, line, cols.line, cols.boardings_on))
        .collect::<RidershipResult<Vec<f64>>>()?;
    tracing::debug!(lines = config.lines.len(), "computed overall averages");

    let mut by_time = Vec::with_capacity(config.time_buckets.len());
    for bucket in &config.time_buckets {
        let sub = split_by_bucket(table, bucket, cols.time_bucket)?;
        tracing::debug!(bucket = %bucket, rows = sub.row_count(), "split time bucket");

        let mut averages = Vec::with_capacity(config.lines.len());
        for line in &config.lines {
            let avg = match average_for_label(&sub, line, cols.line, cols.boardings_on) {
                Ok(v) => v,
                Err(e) if e.is_no_match() => {
                    tracing::warn!(bucket = %bucket, line = %line, "no rows for line in bucket");
                    f64::NAN
                }
                Err(e) => return Err(e),
            };
            averages.push(avg);
        }
        by_time.push(BucketAverages {
            bucket: bucket.clone(),
            averages,
        });
    }

    Ok(RidershipSummary {
        lines: config.lines.clone(),
        overall,
        by_time,
    })
}

/// Load `config.data_path` and [`summarize`] it.
pub fn run(config: &RidershipConfig, options: &LoadOptions) -> RidershipResult<RidershipSummary> {
    let table = load_table(&config.data_path, options)?;
    summarize(&table, config)
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::config::{ColumnLayout, RidershipConfig};
    use crate::types::Table;

    fn small_config() -> RidershipConfig {
        RidershipConfig {
            columns: ColumnLayout {
                line: 0,
                time_bucket: 1,
                boardings_on: 2,
                boardings_off: 3,
            },
            lines: vec!["Green".to_string(), "Red".to_string()],
            time_buckets: vec!["am".to_string(), "pm".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn fills_missing_bucket_cells_with_nan() {
        let t = Table::from_records([
            vec!["Green", "am", "10", "0"],
            vec!["Green", "pm", "30", "0"],
            vec!["Red", "am", "4", "0"],
        ]);
        let s = summarize(&t, &small_config()).unwrap();

        assert_eq!(s.overall, vec![20.0, 4.0]);
        assert_eq!(s.by_time.len(), 2);
        assert_eq!(s.by_time[0].bucket, "am");
        assert_eq!(s.by_time[0].averages, vec![10.0, 4.0]);
        assert_eq!(s.by_time[1].averages[0], 30.0);
        assert!(s.by_time[1].averages[1].is_nan());
    }

    #[test]
    fn series_for_line_reads_one_column_of_the_matrix() {
        let t = Table::from_records([
            vec!["Green", "am", "10", "0"],
            vec!["Green", "pm", "30", "0"],
            vec!["Red", "pm", "4", "0"],
        ]);
        let s = summarize(&t, &small_config()).unwrap();
        assert_eq!(s.series_for_line(0), vec![10.0, 30.0]);
        let red = s.series_for_line(1);
        assert!(red[0].is_nan());
        assert_eq!(red[1], 4.0);
    }

    #[test]
    fn line_absent_from_whole_table_is_fatal() {
        let t = Table::from_records([vec!["Green", "am", "10", "0"]]);
        let err = summarize(&t, &small_config()).unwrap_err();
        assert!(err.is_no_match());
    }

    #[test]
    fn parse_error_inside_a_bucket_is_fatal() {
        let t = Table::from_records([
            vec!["Green", "am", "10", "0"],
            vec!["Red", "pm", "4", "0"],
            vec!["Red", "am", "x", "0"],
        ]);
        // The overall pass hits the bad value first.
        assert!(!summarize(&t, &small_config()).unwrap_err().is_no_match());
    }
}
