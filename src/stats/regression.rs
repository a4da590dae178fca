//! Ordinary least squares fits over metric pairs.
//!
//! Closed-form OLS on means and cross-products, population-based like the
//! rest of the engine. The log-log variant serves power-law relationships
//! (e.g. social posts vs. video views); it refuses non-positive input rather
//! than folding `ln(0)` into a fit.

use crate::error::{Result, StatsError};

/// One observation of an (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Pearson correlation of the fit; NaN when y is constant.
    pub r: f64,
    /// Coefficient of determination; NaN when y is constant.
    pub r_squared: f64,
}

impl LinearFit {
    /// Predicted y at the given x.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Prediction for a fit obtained from [`log_log_regression`], mapped
    /// back out of log space: `y = e^intercept * x^slope`.
    pub fn predict_power_law(&self, x: f64) -> f64 {
        self.intercept.exp() * x.powf(self.slope)
    }
}

/// Fit a line by ordinary least squares.
///
/// Requires at least 2 points and at least 2 distinct x values; a
/// zero-variance independent variable is a [`StatsError::DegenerateFit`].
/// When y is constant the slope is 0 and `r`/`r_squared` are NaN — the
/// correlation of a constant is undefined, not 1 or 0.
pub fn linear_regression(points: &[Point]) -> Result<LinearFit> {
    if points.len() < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            got: points.len(),
        });
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_yy = 0.0;
    let mut ss_xy = 0.0;
    for p in points {
        let dx = p.x - mean_x;
        let dy = p.y - mean_y;
        ss_xx += dx * dx;
        ss_yy += dy * dy;
        ss_xy += dx * dy;
    }

    if ss_xx == 0.0 {
        return Err(StatsError::DegenerateFit(
            "independent variable has zero variance".to_string(),
        ));
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let (r, r_squared) = if ss_yy == 0.0 {
        (f64::NAN, f64::NAN)
    } else {
        let r = (ss_xy / (ss_xx * ss_yy).sqrt()).clamp(-1.0, 1.0);
        (r, r * r)
    };

    Ok(LinearFit {
        slope,
        intercept,
        r,
        r_squared,
    })
}

/// Fit `ln y = slope * ln x + intercept` for power-law relationships.
///
/// Every point must have `x > 0` and `y > 0`; the caller excludes
/// zero/negative observations (see [`filter_positive`]) before fitting.
pub fn log_log_regression(points: &[Point]) -> Result<LinearFit> {
    if let Some(bad) = points.iter().find(|p| p.x <= 0.0 || p.y <= 0.0) {
        return Err(StatsError::DomainViolation(format!(
            "log-log fit requires positive values, got ({}, {})",
            bad.x, bad.y
        )));
    }

    let logged: Vec<Point> = points
        .iter()
        .map(|p| Point::new(p.x.ln(), p.y.ln()))
        .collect();

    linear_regression(&logged)
}

/// Drop points with a non-positive coordinate, keeping input order.
///
/// The exclusion step for log-log fits over count data, where zeros are
/// common and must not reach the transform.
pub fn filter_positive(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|p| p.x > 0.0 && p.y > 0.0)
        .collect()
}

/// Coefficient of determination `1 - SS_res / SS_tot` for a set of
/// predictions against observed values.
///
/// When every observed value is identical `SS_tot` is 0 and the quantity is
/// undefined; that ambiguity is surfaced as a [`StatsError::DegenerateFit`]
/// rather than resolved to an arbitrary 0 or 1.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.is_empty() {
        return Err(StatsError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(StatsError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let mean_actual = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return Err(StatsError::DegenerateFit(
            "observed values have zero variance".to_string(),
        ));
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(pairs: &[(f64, f64)]) -> Vec<Point> {
        pairs.iter().map(|(x, y)| Point::new(*x, *y)).collect()
    }

    #[test]
    fn collinear_points_recover_the_line() {
        // y = 2x + 1
        let pts = points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let fit = linear_regression(&pts).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r, 1.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn age_vs_streams_scenario() {
        let pts = points(&[(1.0, 100.0), (2.0, 200.0), (3.0, 300.0)]);
        let fit = linear_regression(&pts).unwrap();
        assert_relative_eq!(fit.slope, 100.0, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-8);
        assert_relative_eq!(fit.r, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn negative_slope() {
        let pts = points(&[(0.0, 10.0), (1.0, 8.0), (2.0, 6.0), (3.0, 4.0)]);
        let fit = linear_regression(&pts).unwrap();
        assert_relative_eq!(fit.slope, -2.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn noisy_fit_has_r_below_one() {
        let pts = points(&[(0.0, 0.1), (1.0, 1.2), (2.0, 1.9), (3.0, 3.1), (4.0, 4.0)]);
        let fit = linear_regression(&pts).unwrap();
        assert!(fit.slope > 0.9 && fit.slope < 1.1);
        assert!(fit.r_squared > 0.99 && fit.r_squared < 1.0);
    }

    #[test]
    fn too_few_points_is_error() {
        assert_eq!(
            linear_regression(&points(&[(1.0, 2.0)])),
            Err(StatsError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn vertical_line_is_degenerate() {
        let pts = points(&[(3.0, 1.0), (3.0, 2.0), (3.0, 5.0)]);
        assert!(matches!(
            linear_regression(&pts),
            Err(StatsError::DegenerateFit(_))
        ));
    }

    #[test]
    fn constant_y_has_zero_slope_and_nan_r() {
        let pts = points(&[(1.0, 4.0), (2.0, 4.0), (3.0, 4.0)]);
        let fit = linear_regression(&pts).unwrap();
        assert_relative_eq!(fit.slope, 0.0, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 4.0, epsilon = 1e-10);
        assert!(fit.r.is_nan());
        assert!(fit.r_squared.is_nan());
    }

    #[test]
    fn predict_extends_the_line() {
        let pts = points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        let fit = linear_regression(&pts).unwrap();
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-9);
    }

    #[test]
    fn log_log_recovers_power_law() {
        // y = 3 * x^2
        let pts: Vec<Point> = (1..=20)
            .map(|i| {
                let x = i as f64;
                Point::new(x, 3.0 * x * x)
            })
            .collect();
        let fit = log_log_regression(&pts).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept, 3.0_f64.ln(), epsilon = 1e-9);
        assert_relative_eq!(fit.predict_power_law(5.0), 75.0, epsilon = 1e-6);
    }

    #[test]
    fn log_log_rejects_non_positive_values() {
        let pts = points(&[(1.0, 2.0), (0.0, 3.0)]);
        assert!(matches!(
            log_log_regression(&pts),
            Err(StatsError::DomainViolation(_))
        ));

        let pts = points(&[(1.0, 2.0), (2.0, -3.0)]);
        assert!(matches!(
            log_log_regression(&pts),
            Err(StatsError::DomainViolation(_))
        ));
    }

    #[test]
    fn filter_positive_drops_unloggable_points() {
        let pts = points(&[(1.0, 2.0), (0.0, 3.0), (4.0, 0.0), (-1.0, 5.0), (2.0, 2.0)]);
        let kept = filter_positive(&pts);
        assert_eq!(kept, points(&[(1.0, 2.0), (2.0, 2.0)]));
    }

    #[test]
    fn r_squared_perfect_predictions() {
        let actual = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(r_squared(&actual, &actual).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_mean_predictor_is_zero() {
        let actual = [1.0, 2.0, 3.0, 4.0];
        let predicted = [2.5; 4];
        assert_relative_eq!(
            r_squared(&actual, &predicted).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn r_squared_constant_actual_is_degenerate() {
        assert!(matches!(
            r_squared(&[3.0, 3.0, 3.0], &[3.0, 3.0, 3.0]),
            Err(StatsError::DegenerateFit(_))
        ));
    }

    #[test]
    fn r_squared_length_mismatch() {
        assert!(matches!(
            r_squared(&[1.0, 2.0], &[1.0]),
            Err(StatsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn r_squared_empty_input() {
        assert_eq!(r_squared(&[], &[]), Err(StatsError::EmptyData));
    }
}
