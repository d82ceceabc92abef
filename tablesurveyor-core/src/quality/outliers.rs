//! Outlier detection for numeric columns.
//!
//! This module flags values that fall outside the interquartile-range
//! fences: more than 1.5 IQR below the first quartile or above the third.

use std::collections::HashSet;

/// Multiplier applied to the IQR when computing the outlier fences.
const IQR_FENCE_FACTOR: f64 = 1.5;

/// Detects IQR outliers among the given non-null numeric values.
///
/// Quartiles are computed with linear interpolation over the sorted values.
/// Returns the indices (into `values`, in ascending order) of every value
/// below `Q1 - 1.5 * IQR` or above `Q3 + 1.5 * IQR`.
///
/// Degenerate inputs produce an empty set rather than an error: fewer than
/// 4 distinct values, or an IQR of zero, leave nothing to fence against.
pub fn detect_outliers(values: &[f64]) -> Vec<usize> {
    let distinct: HashSet<u64> = values.iter().map(|v| v.to_bits()).collect();
    if distinct.len() < 4 {
        return Vec::new();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = interpolated_quantile(&sorted, 0.25);
    let q3 = interpolated_quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    if iqr == 0.0 {
        return Vec::new();
    }

    let lower_bound = q1 - IQR_FENCE_FACTOR * iqr;
    let upper_bound = q3 + IQR_FENCE_FACTOR * iqr;

    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v < lower_bound || **v > upper_bound)
        .map(|(i, _)| i)
        .collect()
}

/// Linear-interpolated quantile over sorted values.
///
/// Uses the `(n - 1) * q` positioning convention, so `q = 0.5` on an even
/// count averages the two middle values.
fn interpolated_quantile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Median of sorted values via the interpolated quantile.
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    interpolated_quantile(sorted, 0.5)
}
