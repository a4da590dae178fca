//! Pearson correlation over metric columns.

use crate::core::{metric_column, Metric, Record};
use crate::error::{Result, StatsError};
use crate::stats::descriptive::mean;

/// Pearson correlation coefficient between two equal-length series.
///
/// Population covariance and standard deviations (denominator `n`). A
/// constant series has no defined correlation; the result is `Ok(NaN)` so
/// the caller can distinguish "no correlation computable" from a true zero.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            got: x.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    cov /= n;
    var_x /= n;
    var_y /= n;

    if var_x == 0.0 || var_y == 0.0 {
        return Ok(f64::NAN);
    }

    // Rounding can push |r| a hair past 1 for collinear data
    Ok((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pairwise Pearson correlation matrix over the selected metrics.
///
/// Square and symmetric by construction: the upper triangle is computed once
/// and mirrored, and the diagonal is written as exactly 1.0 by the algebraic
/// identity rather than recomputed. Entries for constant metrics are NaN.
pub fn correlation_matrix(records: &[Record], fields: &[Metric]) -> Result<Vec<Vec<f64>>> {
    if fields.is_empty() {
        return Ok(Vec::new());
    }
    if records.len() < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            got: records.len(),
        });
    }

    let columns: Vec<Vec<f64>> = fields.iter().map(|f| metric_column(records, *f)).collect();

    let k = fields.len();
    let mut matrix = vec![vec![0.0; k]; k];
    for i in 0..k {
        matrix[i][i] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(&columns[i], &columns[j])?;
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    Ok(matrix)
}
