//! In-memory table operations.
//!
//! Everything here takes a borrowed [`crate::types::Table`] and returns freshly allocated
//! output; the source table is never modified.
//!
//! - [`column()`]: values of one column
//! - [`average_for_label()`]: mean of a numeric column over rows with a given label
//! - [`split_by_bucket()`]: sub-table of rows in one time bucket
//! - [`filter_reduce()`]: the predicate + fold pass the two above are built on
//!
//! ## Example: bucket → average
//!
//! ```rust
//! use ridership_stats::processing::{average_for_label, split_by_bucket};
//! use ridership_stats::types::Table;
//!
//! let t = Table::from_records([
//!     vec!["Green", "time_period_01", "10"],
//!     vec!["Green", "time_period_02", "20"],
//!     vec!["Red", "time_period_01", "5"],
//! ]);
//!
//! let early = split_by_bucket(&t, "time_period_01", 1).unwrap();
//! assert_eq!(early.row_count(), 2);
//! assert_eq!(average_for_label(&early, "Green", 0, 2).unwrap(), 10.0);
//! ```

pub mod average;
pub mod bucket;
pub mod column;
pub mod reduce;

pub use average::average_for_label;
pub use bucket::split_by_bucket;
pub use column::column;
pub use reduce::{field_equals, filter_reduce};
