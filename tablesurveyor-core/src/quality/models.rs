//! Quality report models.
//!
//! This module defines the data structures produced by a profiling run.
//! All models are designed to be safe for output - they contain only
//! counts, ratios, and aggregates, never individual cell values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::ColumnKind;

/// Severity level for a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Likely data quality problem that should be investigated
    Warning,
    /// Noteworthy observation, not necessarily a problem
    Info,
}

impl IssueSeverity {
    /// Returns the lowercase name of this severity.
    pub fn name(&self) -> &'static str {
        match self {
            IssueSeverity::Warning => "warning",
            IssueSeverity::Info => "info",
        }
    }
}

/// Kind of a threshold-triggered issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// More than 20% of the column's cells are null
    HighNullPercentage,
    /// More than half of the column's cells are duplicates
    HighDuplicates,
    /// More than 15% of a numeric column's cells are IQR outliers
    HighOutliers,
}

impl IssueKind {
    /// Returns the snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            IssueKind::HighNullPercentage => "high_null_percentage",
            IssueKind::HighDuplicates => "high_duplicates",
            IssueKind::HighOutliers => "high_outliers",
        }
    }
}

/// A threshold-triggered quality concern for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Kind of the triggered rule
    pub kind: IssueKind,
    /// Name of the affected column
    pub column: String,
    /// Severity of the concern
    pub severity: IssueSeverity,
    /// Human-readable description
    pub message: String,
}

/// Summary statistics over a numeric column's non-null values.
///
/// `mean`, `median` and `std_dev` are rounded to 2 decimals for display;
/// `min` and `max` are reported unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (average of the two middle values for even counts)
    pub median: f64,
    /// Sample standard deviation (0.0 for a single observation)
    pub std_dev: f64,
}

/// Heuristic classification of a textual column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHints {
    /// A strict majority of the sampled values look like email addresses
    pub likely_email: bool,
    /// A strict majority of the sampled values parse as calendar dates
    pub likely_date: bool,
}

/// The statistical fingerprint of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name
    pub name: String,
    /// Declared kind of the column
    pub kind: ColumnKind,
    /// Total cell count, including nulls
    pub total: u64,
    /// Count of null cells
    pub null_count: u64,
    /// Null percentage of total, rounded to 2 decimals
    pub null_pct: f64,
    /// Count of distinct non-null values
    pub unique_count: u64,
    /// `total - unique_count`
    pub duplicate_count: u64,
    /// True for numeric columns
    pub is_numeric: bool,
    /// Numeric summary; present for numeric columns with at least one value
    pub numeric_summary: Option<NumericSummary>,
    /// IQR outlier count; present for numeric columns
    pub outlier_count: Option<u64>,
    /// Outlier percentage of total, rounded to 2 decimals
    pub outlier_pct: Option<f64>,
    /// Format hints; present for textual columns with at least one value
    pub type_hints: Option<TypeHints>,
    /// Heuristic 0-100 health score, rounded to 1 decimal
    pub quality_score: f64,
}

/// Dataset-level counters computed over all column profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Columns with at least one null cell
    pub columns_with_nulls: u64,
    /// Columns with at least one duplicate cell
    pub columns_with_duplicates: u64,
    /// Columns of numeric kind
    pub numeric_columns: u64,
    /// Total number of detected issues
    pub total_issues: u64,
}

/// Complete quality report for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Identifier of the analyzed dataset
    pub source: String,
    /// Timestamp of report generation
    pub generated_at: DateTime<Utc>,
    /// Number of rows analyzed
    pub row_count: u64,
    /// Number of columns analyzed
    pub column_count: u64,
    /// Mean of the column scores, rounded to 1 decimal
    pub overall_score: f64,
    /// Per-column profiles, in column order
    pub columns: Vec<ColumnProfile>,
    /// Detected issues, in column order then rule order
    pub issues: Vec<Issue>,
    /// Dataset-level counters
    pub summary: ReportSummary,
}

impl QualityReport {
    /// Returns true if any issues were detected.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Rounds a value to 1 decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds a value to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
