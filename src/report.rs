//! Plain-text ridership report.

use std::io::{self, Write};

use crate::aggregate::RidershipSummary;

/// Write the per-line averages, one line per label, each rounded half-to-even.
///
/// ```text
/// Average ridership per line:
///     Green: 123 avg riders.
/// ```
pub fn write_text_report<W: Write>(out: &mut W, summary: &RidershipSummary) -> io::Result<()> {
    writeln!(out, "Average ridership per line:")?;
    for (line, avg) in summary.overall_by_line() {
        writeln!(out, "\t{line}: {} avg riders.", round_riders(avg))?;
    }
    Ok(())
}

fn round_riders(avg: f64) -> i64 {
    avg.round_ties_even() as i64
}
