//! Per-column structural profiling.
//!
//! Computes the statistical fingerprint of a single column: null density,
//! distinct/duplicate counts, a numeric summary with outlier detection for
//! numeric columns, format hints for textual columns, and the quality score.
//! Profiling is a pure computation - deterministic for the same cells in the
//! same order (ordering only affects which values land in the sniff sample).

use std::collections::HashSet;

use super::models::{round2, ColumnProfile, NumericSummary};
use super::outliers::{detect_outliers, median_of_sorted};
use super::score::quality_score;
use super::sniff::{sniff_sample, SNIFF_SAMPLE_LIMIT};
use crate::table::{Column, ColumnKind, ColumnValues};

/// Profiles one column into a [`ColumnProfile`].
///
/// A column with zero cells yields the degenerate profile (all counts zero,
/// score zero) rather than an error. Nulls are excluded from the distinct
/// set but counted separately; `duplicate_count` is `total - unique_count`.
pub fn profile_column(column: &Column) -> ColumnProfile {
    let total = column.len() as u64;
    let kind = column.kind();
    if total == 0 {
        return degenerate_profile(column.name(), kind);
    }

    let (null_count, unique_count) = count_nulls_and_distinct(column.values());
    let null_pct = round2(null_count as f64 / total as f64 * 100.0);

    let mut profile = ColumnProfile {
        name: column.name().to_string(),
        kind,
        total,
        null_count,
        null_pct,
        unique_count,
        duplicate_count: total - unique_count,
        is_numeric: kind == ColumnKind::Numeric,
        numeric_summary: None,
        outlier_count: None,
        outlier_pct: None,
        type_hints: None,
        quality_score: 0.0,
    };

    match column.values() {
        ColumnValues::Numeric(cells) => {
            let non_null: Vec<f64> = cells.iter().flatten().copied().collect();
            profile.numeric_summary = numeric_summary(&non_null);

            let outlier_count = detect_outliers(&non_null).len() as u64;
            profile.outlier_count = Some(outlier_count);
            profile.outlier_pct = Some(round2(outlier_count as f64 / total as f64 * 100.0));
        }
        ColumnValues::Text(cells) => {
            let sample: Vec<&str> = cells
                .iter()
                .flatten()
                .take(SNIFF_SAMPLE_LIMIT)
                .map(String::as_str)
                .collect();
            if !sample.is_empty() {
                profile.type_hints = Some(sniff_sample(&sample));
            }
        }
        ColumnValues::Boolean(_) | ColumnValues::Temporal(_) => {}
    }

    profile.quality_score = quality_score(&profile);
    profile
}

/// Counts null cells and distinct non-null values in one pass per column.
fn count_nulls_and_distinct(values: &ColumnValues) -> (u64, u64) {
    match values {
        ColumnValues::Numeric(cells) => {
            // Distinctness by bit pattern: exact-value equality, no epsilon
            let mut distinct: HashSet<u64> = HashSet::new();
            let mut nulls: u64 = 0;
            for cell in cells {
                match cell {
                    Some(v) => {
                        distinct.insert(v.to_bits());
                    }
                    None => nulls += 1,
                }
            }
            (nulls, distinct.len() as u64)
        }
        ColumnValues::Text(cells) => {
            let mut distinct: HashSet<&str> = HashSet::new();
            let mut nulls: u64 = 0;
            for cell in cells {
                match cell {
                    Some(v) => {
                        distinct.insert(v.as_str());
                    }
                    None => nulls += 1,
                }
            }
            (nulls, distinct.len() as u64)
        }
        ColumnValues::Boolean(cells) => {
            let mut distinct: HashSet<bool> = HashSet::new();
            let mut nulls: u64 = 0;
            for cell in cells {
                match cell {
                    Some(v) => {
                        distinct.insert(*v);
                    }
                    None => nulls += 1,
                }
            }
            (nulls, distinct.len() as u64)
        }
        ColumnValues::Temporal(cells) => {
            let mut distinct: HashSet<i64> = HashSet::new();
            let mut nulls: u64 = 0;
            for cell in cells {
                match cell {
                    Some(v) => {
                        distinct.insert(v.timestamp_micros());
                    }
                    None => nulls += 1,
                }
            }
            (nulls, distinct.len() as u64)
        }
    }
}

/// Summary statistics over non-null numeric values.
///
/// Returns `None` when every cell is null - the summary is undefined, which
/// is data, not an error. Standard deviation is the sample standard
/// deviation; a single observation yields 0.0.
fn numeric_summary(non_null: &[f64]) -> Option<NumericSummary> {
    if non_null.is_empty() {
        return None;
    }

    let n = non_null.len() as f64;
    let mut sorted = non_null.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mean = non_null.iter().sum::<f64>() / n;
    let median = median_of_sorted(&sorted);

    let std_dev = if non_null.len() < 2 {
        0.0
    } else {
        let variance = non_null.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    };

    Some(NumericSummary {
        min,
        max,
        mean: round2(mean),
        median: round2(median),
        std_dev: round2(std_dev),
    })
}

/// Degenerate profile for a column with no cells.
fn degenerate_profile(name: &str, kind: ColumnKind) -> ColumnProfile {
    let is_numeric = kind == ColumnKind::Numeric;
    ColumnProfile {
        name: name.to_string(),
        kind,
        total: 0,
        null_count: 0,
        null_pct: 0.0,
        unique_count: 0,
        duplicate_count: 0,
        is_numeric,
        numeric_summary: None,
        outlier_count: is_numeric.then_some(0),
        outlier_pct: is_numeric.then_some(0.0),
        type_hints: None,
        quality_score: 0.0,
    }
}

/// Minimal null-heavy fallback used when profiling a column fails.
///
/// Carries a 100% null fraction so the failure surfaces through the normal
/// issue thresholds, and a score of 0.
pub(crate) fn degraded_profile(name: &str, kind: ColumnKind, total: u64) -> ColumnProfile {
    ColumnProfile {
        name: name.to_string(),
        kind,
        total,
        null_count: total,
        null_pct: if total == 0 { 0.0 } else { 100.0 },
        unique_count: 0,
        duplicate_count: 0,
        is_numeric: kind == ColumnKind::Numeric,
        numeric_summary: None,
        outlier_count: None,
        outlier_pct: None,
        type_hints: None,
        quality_score: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_column_profile() {
        let column = Column::numeric(
            "amount",
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), None],
        );
        let profile = profile_column(&column);

        assert_eq!(profile.total, 5);
        assert_eq!(profile.null_count, 1);
        assert_eq!(profile.null_pct, 20.0);
        assert_eq!(profile.unique_count, 4);
        assert_eq!(profile.duplicate_count, 1);
        assert!(profile.is_numeric);

        let stats = profile.numeric_summary.unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        // sample std dev of 1..4 is ~1.29
        assert_eq!(stats.std_dev, 1.29);

        assert_eq!(profile.outlier_count, Some(0));
        assert_eq!(profile.outlier_pct, Some(0.0));
        assert!(profile.type_hints.is_none());
        // 20% nulls: 100 - 10
        assert_eq!(profile.quality_score, 90.0);
    }

    #[test]
    fn test_numeric_outliers_feed_profile() {
        let cells = vec![
            Some(1.0),
            Some(2.0),
            Some(3.0),
            Some(4.0),
            Some(5.0),
            Some(6.0),
            Some(7.0),
            Some(100.0),
        ];
        let profile = profile_column(&Column::numeric("value", cells));

        assert_eq!(profile.outlier_count, Some(1));
        assert_eq!(profile.outlier_pct, Some(12.5));
        // Outlier fraction above 10%: flat 10 deducted
        assert_eq!(profile.quality_score, 90.0);
    }

    #[test]
    fn test_all_null_numeric_column() {
        let profile = profile_column(&Column::numeric("empty", vec![None, None, None, None]));

        assert_eq!(profile.null_count, 4);
        assert_eq!(profile.null_pct, 100.0);
        assert_eq!(profile.unique_count, 0);
        assert_eq!(profile.duplicate_count, 4);
        assert!(profile.numeric_summary.is_none());
        assert_eq!(profile.outlier_count, Some(0));
        assert_eq!(profile.outlier_pct, Some(0.0));
        // 100 - 50 (nulls) - 20 (duplicate_count > total/2)
        assert_eq!(profile.quality_score, 30.0);
    }

    #[test]
    fn test_text_column_sniffed() {
        let cells = vec![
            Some("a@b.com".to_string()),
            Some("bad".to_string()),
            Some("c@d.org".to_string()),
            None,
        ];
        let profile = profile_column(&Column::text("email", cells));

        assert!(!profile.is_numeric);
        assert!(profile.numeric_summary.is_none());
        assert!(profile.outlier_count.is_none());

        let hints = profile.type_hints.unwrap();
        assert!(hints.likely_email);
        assert!(!hints.likely_date);
    }

    #[test]
    fn test_text_column_without_values_has_no_hints() {
        let profile = profile_column(&Column::text("notes", vec![None, None]));
        assert!(profile.type_hints.is_none());
    }

    #[test]
    fn test_sniff_sample_is_bounded() {
        // 150 emails followed by 200 plain strings: only the first 100
        // non-null values are sampled, so the email hint still wins.
        let mut cells: Vec<Option<String>> = (0..150)
            .map(|i| Some(format!("user{i}@example.com")))
            .collect();
        cells.extend((0..200).map(|i| Some(format!("plain {i}"))));

        let profile = profile_column(&Column::text("email", cells));
        assert!(profile.type_hints.unwrap().likely_email);
    }

    #[test]
    fn test_boolean_column_counts_only() {
        let cells = vec![Some(true), Some(false), Some(true), None];
        let profile = profile_column(&Column::boolean("active", cells));

        assert!(!profile.is_numeric);
        assert_eq!(profile.unique_count, 2);
        assert_eq!(profile.duplicate_count, 2);
        assert!(profile.numeric_summary.is_none());
        assert!(profile.type_hints.is_none());
    }

    #[test]
    fn test_temporal_column_counts_only() {
        let base = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let cells = vec![Some(base), Some(base), None];
        let profile = profile_column(&Column::temporal("created_at", cells));

        assert_eq!(profile.null_count, 1);
        assert_eq!(profile.unique_count, 1);
        assert_eq!(profile.duplicate_count, 2);
        assert!(!profile.is_numeric);
    }

    #[test]
    fn test_zero_row_column_is_degenerate() {
        let profile = profile_column(&Column::numeric("void", vec![]));

        assert_eq!(profile.total, 0);
        assert_eq!(profile.null_count, 0);
        assert_eq!(profile.duplicate_count, 0);
        assert!(profile.numeric_summary.is_none());
        assert_eq!(profile.outlier_count, Some(0));
        assert_eq!(profile.quality_score, 0.0);
    }

    #[test]
    fn test_single_value_std_dev_is_zero() {
        let profile = profile_column(&Column::numeric("one", vec![Some(42.0)]));
        let stats = profile.numeric_summary.unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
    }

    #[test]
    fn test_degraded_profile_shape() {
        let profile = degraded_profile("broken", ColumnKind::Numeric, 10);
        assert_eq!(profile.null_count, 10);
        assert_eq!(profile.null_pct, 100.0);
        assert_eq!(profile.duplicate_count, 0);
        assert_eq!(profile.quality_score, 0.0);
        assert!(profile.is_numeric);
    }
}
