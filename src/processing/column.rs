//! Column extraction for [`crate::types::Table`].

use crate::error::RidershipResult;
use crate::types::Table;

/// Returns the value at `column` from every row, in row order.
///
/// Rows with no fields at all are skipped. Any other row too short to hold `column` fails with
/// [`crate::RidershipError::MalformedRow`].
pub fn column(table: &Table, column: usize) -> RidershipResult<Vec<String>> {
    table
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.field(column).map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::column;
    use crate::error::RidershipError;
    use crate::types::{Row, Table};

    #[test]
    fn extracts_values_in_row_order() {
        let t = Table::from_records([
            vec!["Green", "10"],
            vec!["Red", "5"],
            vec!["Blue", "7"],
        ]);
        assert_eq!(column(&t, 0).unwrap(), vec!["Green", "Red", "Blue"]);
        assert_eq!(column(&t, 1).unwrap(), vec!["10", "5", "7"]);
    }

    #[test]
    fn empty_table_yields_empty_column() {
        assert!(column(&Table::default(), 4).unwrap().is_empty());
    }

    #[test]
    fn zero_field_rows_are_skipped() {
        let t = Table::new(vec![
            Row::new(2, vec!["a".to_string()]),
            Row::new(3, Vec::new()),
            Row::new(4, vec!["b".to_string()]),
        ]);
        assert_eq!(column(&t, 0).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn short_row_is_reported_with_its_line() {
        let t = Table::from_records([vec!["a", "b"], vec!["c"]]);
        let err = column(&t, 1).unwrap_err();
        assert!(matches!(
            err,
            RidershipError::MalformedRow { line: 3, column: 1, fields: 1 }
        ));
    }
}
