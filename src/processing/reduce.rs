//! The filter-then-reduce pass shared by averaging and bucketing.

use crate::error::RidershipResult;
use crate::types::{Row, Table};

/// Fold every row accepted by `predicate` into an accumulator.
///
/// Rows are visited in table order. Both closures may fail; the first error stops the pass and
/// is returned unchanged.
pub fn filter_reduce<A, P, F>(
    table: &Table,
    mut predicate: P,
    init: A,
    mut reducer: F,
) -> RidershipResult<A>
where
    P: FnMut(&Row) -> RidershipResult<bool>,
    F: FnMut(A, &Row) -> RidershipResult<A>,
{
    table.iter().try_fold(init, |acc, row| {
        if predicate(row)? {
            reducer(acc, row)
        } else {
            Ok(acc)
        }
    })
}

/// Predicate matching rows whose `column` equals `label` exactly (case-sensitive).
///
/// A row too short to hold `column` is a [`crate::RidershipError::MalformedRow`].
pub fn field_equals(column: usize, label: &str) -> impl FnMut(&Row) -> RidershipResult<bool> + '_ {
    move |row: &Row| -> RidershipResult<bool> { Ok(row.field(column)? == label) }
}
