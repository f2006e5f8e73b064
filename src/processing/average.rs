//! Per-label averaging of a numeric column.

use crate::error::{RidershipError, RidershipResult};
use crate::types::{Row, Table};

use super::reduce::{field_equals, filter_reduce};

/// Mean of `value_column` over rows whose `label_column` equals `label`.
///
/// - Matching is exact and case-sensitive.
/// - Values are parsed as integers; surrounding whitespace is ignored.
/// - If no row matches, returns [`RidershipError::NoMatchingRows`].
///
/// ```rust
/// use ridership_stats::processing::average_for_label;
/// use ridership_stats::types::Table;
///
/// let t = Table::from_records([vec!["Green", "10"], vec!["Green", "20"], vec!["Red", "5"]]);
/// assert_eq!(average_for_label(&t, "Green", 0, 1).unwrap(), 15.0);
/// ```
pub fn average_for_label(
    table: &Table,
    label: &str,
    label_column: usize,
    value_column: usize,
) -> RidershipResult<f64> {
    let (sum, count) = filter_reduce(
        table,
        field_equals(label_column, label),
        (0i64, 0usize),
        |(sum, count), row| {
            let value = parse_count(row, value_column)?;
            let sum = sum.checked_add(value).ok_or_else(|| RidershipError::ParseError {
                line: row.line,
                column: value_column,
                raw: row.fields[value_column].clone(),
                message: "boardings sum overflow".to_string(),
            })?;
            Ok((sum, count + 1))
        },
    )?;

    if count == 0 {
        return Err(RidershipError::NoMatchingRows {
            label: label.to_owned(),
            column: label_column,
        });
    }
    Ok(sum as f64 / count as f64)
}

fn parse_count(row: &Row, column: usize) -> RidershipResult<i64> {
    let raw = row.field(column)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|e| RidershipError::ParseError {
            line: row.line,
            column,
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
