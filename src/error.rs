use thiserror::Error;

/// Convenience result type for ridership operations.
pub type RidershipResult<T> = Result<T, RidershipError>;

/// Error type returned by loading, processing and rendering.
///
/// Every variant is terminal for a run except [`RidershipError::NoMatchingRows`], which the
/// aggregation driver tolerates for individual time-bucket cells.
#[derive(Debug, Error)]
pub enum RidershipError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A row is too short to hold a requested column.
    #[error("malformed row at line {line}: column {column} requested but row has {fields} field(s)")]
    MalformedRow {
        line: usize,
        column: usize,
        fields: usize,
    },

    /// A numeric field could not be parsed as an integer.
    #[error("failed to parse value at line {line} column {column}: {message} (raw='{raw}')")]
    ParseError {
        line: usize,
        column: usize,
        raw: String,
        message: String,
    },

    /// Averaging found no row whose label column equals the requested label.
    #[error("no matching rows for '{label}' in column {column}")]
    NoMatchingRows { label: String, column: usize },

    /// The chart backend failed to draw or encode an image.
    #[error("render error: {message}")]
    Render { message: String },
}

impl RidershipError {
    /// Returns `true` for the zero-match condition.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatchingRows { .. })
    }
}
