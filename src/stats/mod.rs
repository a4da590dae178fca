//! Statistical routines over numeric samples and metric columns.

pub mod correlation;
pub mod descriptive;
pub mod regression;

pub use correlation::{correlation_matrix, pearson};
pub use descriptive::{
    box_stats, describe, mean, median, population_std, population_variance, quantile, BoxStats,
    Summary,
};
pub use regression::{
    filter_positive, linear_regression, log_log_regression, r_squared, LinearFit, Point,
};
