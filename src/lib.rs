//! # streamstats
//!
//! Statistical transformation library for music streaming analytics.
//!
//! Turns an in-memory table of track [`Record`](core::Record)s into the
//! derived series an analytics dashboard renders: box-plot statistics,
//! Pearson correlation matrices, OLS and power-law fits, nested group
//! hierarchies for sunburst charts, and multi-axis range filtering for
//! brushed selections.
//!
//! Every function is pure: inputs are never mutated, derived structures are
//! recomputed from scratch per call, and there is no shared state or cache.
//! Loading (CSV parsing) and rendering are external collaborators.
//!
//! # Example
//!
//! ```
//! use streamstats::core::{Metric, Record};
//! use streamstats::stats::{box_stats, correlation_matrix};
//!
//! let records: Vec<Record> = (1..=6)
//!     .map(|i| {
//!         Record::builder(format!("track {i}"), "artist")
//!             .metric(Metric::SpotifyStreams, i as f64 * 100.0)
//!             .metric(Metric::YoutubeViews, i as f64 * 10.0)
//!             .build()
//!     })
//!     .collect();
//!
//! let streams: Vec<f64> = records
//!     .iter()
//!     .map(|r| r.metric(Metric::SpotifyStreams))
//!     .collect();
//! let stats = box_stats(&streams)?;
//! assert!(stats.whisker_low <= stats.median);
//!
//! let matrix = correlation_matrix(
//!     &records,
//!     &[Metric::SpotifyStreams, Metric::YoutubeViews],
//! )?;
//! assert_eq!(matrix[0][0], 1.0);
//! # Ok::<(), streamstats::StatsError>(())
//! ```

pub mod aggregate;
pub mod core;
pub mod error;
pub mod filter;
pub mod hierarchy;
pub mod stats;
pub mod utils;

pub use error::{Result, StatsError};

pub mod prelude {
    pub use crate::aggregate::{group_reduce, mean_by, sum_by};
    pub use crate::core::{metric_column, Metric, Record};
    pub use crate::error::{Result, StatsError};
    pub use crate::filter::RangeFilter;
    pub use crate::hierarchy::{HierarchyBuilder, HierarchyNode};
    pub use crate::stats::{
        box_stats, correlation_matrix, linear_regression, log_log_regression, pearson, BoxStats,
        LinearFit, Point,
    };
}
