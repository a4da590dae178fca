//! Error types for the streamstats library.

use thiserror::Error;

/// Result type alias for statistical operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur during statistical computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Dimension mismatch between paired series.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A fit cannot be computed (e.g. zero-variance independent variable).
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),

    /// A value outside the mathematical domain of a transform (e.g. the log
    /// of a non-positive number).
    #[error("domain violation: {0}")]
    DomainViolation(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
