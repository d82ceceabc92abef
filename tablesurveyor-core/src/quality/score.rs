//! Heuristic column quality scoring.
//!
//! Converts a column profile into a bounded 0-100 health score. The weights
//! and penalties are fixed, deliberately simple constants rather than a
//! calibrated statistical metric; they exist to rank columns for human
//! attention, not to estimate anything.

use super::models::{round1, ColumnProfile};

/// Score deducted per percentage point of null cells, applied linearly.
const NULL_PCT_WEIGHT: f64 = 0.5;

/// Flat deduction when more than half of the cells are duplicates.
const DUPLICATE_PENALTY: f64 = 20.0;

/// Duplicate fraction above which the flat duplicate penalty applies.
const DUPLICATE_RATIO_LIMIT: f64 = 0.5;

/// Flat deduction when a numeric column's outlier percentage exceeds the limit.
const OUTLIER_PENALTY: f64 = 10.0;

/// Outlier percentage above which the flat outlier penalty applies.
const OUTLIER_PCT_LIMIT: f64 = 10.0;

/// Scores a column profile on a 0-100 scale, rounded to 1 decimal.
///
/// Penalties apply independently, in order:
/// 1. `null_pct * 0.5` subtracted linearly
/// 2. flat 20 when `duplicate_count > total * 0.5`
/// 3. flat 10 when a numeric column's `outlier_pct > 10`
///
/// A column with no cells at all scores 0.
pub fn quality_score(profile: &ColumnProfile) -> f64 {
    if profile.total == 0 {
        return 0.0;
    }

    let mut score = 100.0;
    score -= profile.null_pct * NULL_PCT_WEIGHT;

    if profile.duplicate_count as f64 > profile.total as f64 * DUPLICATE_RATIO_LIMIT {
        score -= DUPLICATE_PENALTY;
    }

    if profile.is_numeric && profile.outlier_pct.unwrap_or(0.0) > OUTLIER_PCT_LIMIT {
        score -= OUTLIER_PENALTY;
    }

    round1(score.clamp(0.0, 100.0))
}
