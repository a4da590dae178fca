//! Core data model: track records and their named metrics.

mod metric;
mod record;

pub use metric::Metric;
pub use record::{metric_column, parse_count, parse_flag, Record, RecordBuilder};
