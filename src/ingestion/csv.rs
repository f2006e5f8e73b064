//! CSV table loading.

use std::path::Path;

use crate::error::RidershipResult;
use crate::types::{Row, Table};

/// Load a comma-delimited file into a [`Table`], discarding the header record.
///
/// Rules:
///
/// - The first record is the header and is not returned.
/// - Records may have differing field counts; shape is checked where columns are consumed.
/// - Fields are kept as raw strings (no trimming, no typing).
pub fn load_table_from_path(path: impl AsRef<Path>) -> RidershipResult<Table> {
    let mut rdr = reader_builder().from_path(path)?;
    load_table_from_reader(&mut rdr)
}

/// Load a [`Table`] from an existing CSV reader.
///
/// The reader should be configured with `has_headers(true)`; see [`reader_builder`].
pub fn load_table_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> RidershipResult<Table> {
    let mut rows = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            // +2: 1-based, and the header is line 1.
            .unwrap_or(row_idx0 + 2);
        rows.push(Row::new(line, record.iter().map(str::to_owned).collect()));
    }
    Ok(Table::new(rows))
}

/// CSV reader settings used for ridership files.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).delimiter(b',');
    builder
}
