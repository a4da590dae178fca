//! Descriptive statistics: moments, quantiles and box-plot statistics.
//!
//! Scalar helpers return NaN on degenerate input; structured results
//! ([`box_stats`], [`describe`]) return errors instead, since their consumers
//! bind fields directly to visual channels and must not render NaN shapes.

use crate::error::{Result, StatsError};

/// Arithmetic mean. NaN on empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (denominator `n`). NaN on empty input.
///
/// The whole engine is population-based so correlation and regression agree
/// on normalization.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation. NaN on empty input.
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Linear-interpolation quantile of an unsorted sample.
///
/// For quantile `p` the index is `p * (n - 1)`, interpolated between the
/// neighboring sorted values. `p` is clamped to `[0, 1]`. NaN on empty input.
pub fn quantile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted_quantile(&sorted, p)
}

/// Quantile of an already-sorted sample. Callers that need several quantiles
/// sort once and use this directly.
fn sorted_quantile(sorted: &[f64], p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = p * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Median (50th percentile). NaN on empty input.
pub fn median(values: &[f64]) -> f64 {
    quantile(values, 0.5)
}

/// Box-plot statistics for one numeric sample.
///
/// Whiskers are the most extreme values inside the Tukey fences
/// (`q1 - 1.5*IQR`, `q3 + 1.5*IQR`); everything outside is an outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Lowest non-outlier value, at most `q1`.
    pub whisker_low: f64,
    /// Highest non-outlier value, at least `q3`.
    pub whisker_high: f64,
    /// Sample values outside the fences, duplicates preserved, in input order.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Compute box-plot statistics for a non-empty sample.
pub fn box_stats(values: &[f64]) -> Result<BoxStats> {
    if values.is_empty() {
        return Err(StatsError::EmptyData);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = sorted_quantile(&sorted, 0.25);
    let med = sorted_quantile(&sorted, 0.5);
    let q3 = sorted_quantile(&sorted, 0.75);
    let iqr = q3 - q1;

    let fence_low = q1 - 1.5 * iqr;
    let fence_high = q3 + 1.5 * iqr;

    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v < fence_low || *v > fence_high)
        .collect();

    // Whiskers sit at the in-fence extrema. Sorted order makes these the
    // first/last values inside the fences; a sample where one side has no
    // in-fence value falls back to the true extremum on that side. Clamping
    // against the quartiles keeps `whisker_low <= q1 <= q3 <= whisker_high`
    // when a gappy sample leaves no data between a fence and its quartile
    // (the whisker collapses onto the box edge).
    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= fence_low)
        .unwrap_or(sorted[0])
        .min(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= fence_high)
        .unwrap_or(sorted[sorted.len() - 1])
        .max(q3);

    Ok(BoxStats {
        q1,
        median: med,
        q3,
        whisker_low,
        whisker_high,
        outliers,
    })
}

/// Aggregate summary of a numeric sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
}

/// Compute the common descriptive statistics in one pass-and-sort.
pub fn describe(values: &[f64]) -> Result<Summary> {
    if values.is_empty() {
        return Err(StatsError::EmptyData);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(Summary {
        count: values.len(),
        mean: mean(values),
        std_dev: population_std(values),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        q1: sorted_quantile(&sorted, 0.25),
        median: sorted_quantile(&sorted, 0.5),
        q3: sorted_quantile(&sorted, 0.75),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn population_variance_uses_n_denominator() {
        // Population variance of [1..5] = 2.0 (sample variance would be 2.5)
        assert_relative_eq!(
            population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            2.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(population_variance(&[7.0]), 0.0, epsilon = 1e-10);
        assert!(population_variance(&[]).is_nan());
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        // pos = 0.25 * 3 = 0.75 -> between 1.0 and 2.0
        assert_relative_eq!(quantile(&values, 0.25), 1.75, epsilon = 1e-10);
        assert_relative_eq!(quantile(&values, 0.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile(&values, 1.0), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn quantile_unsorted_input() {
        let values = vec![5.0, 1.0, 3.0, 2.0, 4.0];
        assert_relative_eq!(quantile(&values, 0.5), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn quantile_clamps_p() {
        let values = vec![1.0, 2.0, 3.0];
        assert_relative_eq!(quantile(&values, -0.5), 1.0, epsilon = 1e-10);
        assert_relative_eq!(quantile(&values, 1.5), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn median_even_and_odd() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-10);
    }

    #[test]
    fn box_stats_flags_outlier() {
        // From the dashboard's box-plot fixture: 100 is far outside the fences
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_relative_eq!(stats.median, 3.5, epsilon = 1e-10);
        assert_eq!(stats.outliers, vec![100.0]);
        assert_relative_eq!(stats.whisker_high, 5.0, epsilon = 1e-10);
        assert_relative_eq!(stats.whisker_low, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn box_stats_ordering_invariant() {
        let stats = box_stats(&[3.0, 7.0, 1.0, 9.0, 4.0, 6.0, 2.0]).unwrap();
        assert!(stats.whisker_low <= stats.q1);
        assert!(stats.q1 <= stats.median);
        assert!(stats.median <= stats.q3);
        assert!(stats.q3 <= stats.whisker_high);
    }

    #[test]
    fn box_stats_no_outliers() {
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(stats.outliers.is_empty());
        assert_relative_eq!(stats.whisker_low, 1.0, epsilon = 1e-10);
        assert_relative_eq!(stats.whisker_high, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn box_stats_zero_iqr_does_not_crash() {
        // All-identical values except one odd value: IQR = 0, fences collapse
        let stats = box_stats(&[5.0, 5.0, 5.0, 5.0, 5.0, 12.0]).unwrap();
        assert_relative_eq!(stats.q1, 5.0, epsilon = 1e-10);
        assert_relative_eq!(stats.q3, 5.0, epsilon = 1e-10);
        assert_eq!(stats.outliers, vec![12.0]);
        assert_relative_eq!(stats.whisker_low, 5.0, epsilon = 1e-10);
        assert_relative_eq!(stats.whisker_high, 5.0, epsilon = 1e-10);
    }

    #[test]
    fn box_stats_gappy_sample_keeps_whiskers_on_the_box() {
        // q1 interpolates into the gap, so no sample value sits between the
        // lower fence and q1; the whisker collapses onto the box edge
        let stats = box_stats(&[0.0, 100.0, 101.0, 102.0]).unwrap();
        assert_eq!(stats.outliers, vec![0.0]);
        assert_relative_eq!(stats.whisker_low, stats.q1, epsilon = 1e-10);
        assert!(stats.q3 <= stats.whisker_high);
    }

    #[test]
    fn box_stats_preserves_duplicate_outliers() {
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0, 100.0]).unwrap();
        assert_eq!(stats.outliers, vec![100.0, 100.0]);
    }

    #[test]
    fn box_stats_single_value() {
        let stats = box_stats(&[42.0]).unwrap();
        assert_relative_eq!(stats.median, 42.0, epsilon = 1e-10);
        assert_relative_eq!(stats.whisker_low, 42.0, epsilon = 1e-10);
        assert_relative_eq!(stats.whisker_high, 42.0, epsilon = 1e-10);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn box_stats_empty_is_error() {
        assert_eq!(box_stats(&[]), Err(StatsError::EmptyData));
    }

    #[test]
    fn describe_summary() {
        let summary = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.count, 5);
        assert_relative_eq!(summary.mean, 3.0, epsilon = 1e-10);
        assert_relative_eq!(summary.std_dev, 2.0_f64.sqrt(), epsilon = 1e-10);
        assert_relative_eq!(summary.min, 1.0, epsilon = 1e-10);
        assert_relative_eq!(summary.max, 5.0, epsilon = 1e-10);
        assert_relative_eq!(summary.median, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn describe_empty_is_error() {
        assert_eq!(describe(&[]), Err(StatsError::EmptyData));
    }
}
