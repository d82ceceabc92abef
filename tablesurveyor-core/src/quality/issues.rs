//! Threshold-based issue detection.
//!
//! Scans column profiles and emits a structured [`Issue`] for every crossed
//! threshold. The thresholds are fixed constants of the design; any future
//! configurability must keep these as the defaults.

use super::models::{Issue, IssueKind, IssueSeverity, ColumnProfile};

/// Null percentage above which a column is flagged (strict comparison).
const NULL_PCT_THRESHOLD: f64 = 20.0;

/// Duplicate fraction above which a column is flagged (strict comparison).
const DUPLICATE_RATIO_THRESHOLD: f64 = 0.5;

/// Outlier percentage above which a numeric column is flagged (strict comparison).
const OUTLIER_PCT_THRESHOLD: f64 = 15.0;

/// Detects issues across all column profiles.
///
/// Issues are emitted in column order, and within a column in rule order:
/// nulls, then duplicates, then outliers. At most one issue per rule per
/// column. All comparisons are strict, so a column sitting exactly on a
/// threshold is not flagged.
pub fn detect_issues(profiles: &[ColumnProfile]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for profile in profiles {
        if profile.null_pct > NULL_PCT_THRESHOLD {
            issues.push(Issue {
                kind: IssueKind::HighNullPercentage,
                column: profile.name.clone(),
                severity: IssueSeverity::Warning,
                message: format!("{}: {}% null values", profile.name, profile.null_pct),
            });
        }

        if profile.duplicate_count as f64 > profile.total as f64 * DUPLICATE_RATIO_THRESHOLD {
            issues.push(Issue {
                kind: IssueKind::HighDuplicates,
                column: profile.name.clone(),
                severity: IssueSeverity::Warning,
                message: format!(
                    "{}: {} duplicates detected",
                    profile.name, profile.duplicate_count
                ),
            });
        }

        if profile.is_numeric && profile.outlier_pct.unwrap_or(0.0) > OUTLIER_PCT_THRESHOLD {
            issues.push(Issue {
                kind: IssueKind::HighOutliers,
                column: profile.name.clone(),
                severity: IssueSeverity::Info,
                message: format!(
                    "{}: {}% outliers",
                    profile.name,
                    profile.outlier_pct.unwrap_or(0.0)
                ),
            });
        }
    }

    issues
}
