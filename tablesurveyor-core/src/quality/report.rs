//! Report aggregation.
//!
//! Combines the ordered column profiles and detected issues into a single
//! [`QualityReport`], computing the overall score and the summary counters.

use chrono::{DateTime, Utc};

use super::models::{round1, ColumnProfile, Issue, QualityReport, ReportSummary};
use crate::error::{Result, TableSurveyorError};

/// Builds the final quality report.
///
/// The overall score is the arithmetic mean of the column scores, rounded to
/// 1 decimal; a report over zero columns scores 0. `generated_at` is taken
/// as a parameter so the same inputs always assemble the same report.
///
/// # Errors
/// Returns [`TableSurveyorError::DataShape`] when the profile list is
/// inconsistent with the declared shape (profile count differs from the
/// column count, or a profile's cell total differs from the row count).
/// That can only happen through a profiling defect, so the run must abort.
pub fn build_report(
    source: &str,
    row_count: usize,
    column_count: usize,
    profiles: Vec<ColumnProfile>,
    issues: Vec<Issue>,
    generated_at: DateTime<Utc>,
) -> Result<QualityReport> {
    if profiles.len() != column_count {
        return Err(TableSurveyorError::data_shape(format!(
            "{} profiles for {} columns",
            profiles.len(),
            column_count
        )));
    }
    if let Some(odd) = profiles.iter().find(|p| p.total != row_count as u64) {
        return Err(TableSurveyorError::data_shape(format!(
            "profile '{}' covers {} cells, expected {}",
            odd.name, odd.total, row_count
        )));
    }

    let overall_score = if profiles.is_empty() {
        0.0
    } else {
        round1(profiles.iter().map(|p| p.quality_score).sum::<f64>() / profiles.len() as f64)
    };

    let mut summary = ReportSummary {
        total_issues: issues.len() as u64,
        ..ReportSummary::default()
    };
    for profile in &profiles {
        if profile.null_count > 0 {
            summary.columns_with_nulls += 1;
        }
        if profile.duplicate_count > 0 {
            summary.columns_with_duplicates += 1;
        }
        if profile.is_numeric {
            summary.numeric_columns += 1;
        }
    }

    Ok(QualityReport {
        source: source.to_string(),
        generated_at,
        row_count: row_count as u64,
        column_count: column_count as u64,
        overall_score,
        columns: profiles,
        issues,
        summary,
    })
}
