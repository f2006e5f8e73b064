//! Core data model: [`Row`] and [`Table`].
//!
//! Rows hold raw string fields exactly as read from the source file. Nothing is typed at load
//! time; numeric parsing happens where a column is consumed.

use crate::error::{RidershipError, RidershipResult};

/// A single source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file (the header is line 1).
    pub line: usize,
    /// Raw field values in source order.
    pub fields: Vec<String>,
}

impl Row {
    /// Create a row from its line number and fields.
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `column`, or a [`RidershipError::MalformedRow`] naming this row.
    pub fn field(&self, column: usize) -> RidershipResult<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or(RidershipError::MalformedRow {
                line: self.line,
                column,
                fields: self.fields.len(),
            })
    }
}

/// In-memory table of rows, header excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Rows in source order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a table from string literals, numbering rows as if a header preceded them.
    ///
    /// Handy for tests and small in-memory datasets.
    pub fn from_records<R, S>(records: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(idx0, rec)| Row::new(idx0 + 2, rec.into_iter().map(Into::into).collect()))
            .collect();
        Self { rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
