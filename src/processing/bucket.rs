//! Time-of-day bucketing.

use crate::error::RidershipResult;
use crate::types::Table;

use super::reduce::{field_equals, filter_reduce};

/// Returns a new [`Table`] holding the rows whose `column` equals `bucket`, in source order.
///
/// An empty result is not an error.
pub fn split_by_bucket(table: &Table, bucket: &str, column: usize) -> RidershipResult<Table> {
    let rows = filter_reduce(table, field_equals(column, bucket), Vec::new(), |mut acc, row| {
        acc.push(row.clone());
        Ok(acc)
    })?;
    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::split_by_bucket;
    use crate::types::Table;

    fn sample_table() -> Table {
        Table::from_records([
            vec!["Green", "time_period_01"],
            vec!["Red", "time_period_02"],
            vec!["Blue", "time_period_01"],
        ])
    }

    #[test]
    fn keeps_matching_rows_in_order() {
        let t = sample_table();
        let out = split_by_bucket(&t, "time_period_01", 1).unwrap();
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0], t.rows[0]);
        assert_eq!(out.rows[1], t.rows[2]);
        // Source unchanged
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn no_match_is_an_empty_table() {
        let t = sample_table();
        let out = split_by_bucket(&t, "time_period_11", 1).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn matched_and_unmatched_cover_the_table() {
        let t = sample_table();
        let matched = split_by_bucket(&t, "time_period_02", 1).unwrap().row_count();
        let unmatched = t.iter().filter(|r| r.fields[1] != "time_period_02").count();
        assert_eq!(matched + unmatched, t.row_count());
    }
}
