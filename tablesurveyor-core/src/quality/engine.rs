//! Quality engine facade.
//!
//! Orchestrates a full profiling run: per-column profiling (sequentially or
//! across a fixed-size worker pool), issue detection, and report assembly.

use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use super::issues::detect_issues;
use super::models::{ColumnProfile, QualityReport};
use super::profiler::{degraded_profile, profile_column};
use super::report::build_report;
use crate::error::{Result, TableSurveyorError};
use crate::table::{Column, Table};

/// Configuration for a [`QualityEngine`].
///
/// Only the execution strategy is configurable; the issue thresholds and
/// scoring weights are fixed constants of the design.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Profile columns concurrently across a worker pool
    pub parallel: bool,
    /// Worker pool size; `None` uses the available parallelism
    pub worker_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            worker_threads: None,
        }
    }
}

impl EngineConfig {
    /// Creates a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable/disable parallel profiling.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method to fix the worker pool size.
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }
}

/// The data quality analysis engine.
///
/// A pure, synchronous batch computation: each run owns its input [`Table`]
/// reference and produces its own [`QualityReport`] with no cross-run state.
/// Columns have no data dependencies on each other, so profiling may fan out
/// across worker threads; profiles are always reassembled in column order
/// before issue detection, which is an observable contract of the report.
///
/// # Example
///
/// ```rust,ignore
/// use tablesurveyor_core::quality::QualityEngine;
///
/// let engine = QualityEngine::with_defaults();
/// let report = engine.analyze(&table)?;
/// println!("Overall score: {}/100", report.overall_score);
/// ```
#[derive(Debug, Clone)]
pub struct QualityEngine {
    config: EngineConfig,
}

impl QualityEngine {
    /// Creates a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates a new engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Returns a reference to the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyzes a table, timestamping the report with the current time.
    ///
    /// # Errors
    /// Only [`TableSurveyorError::DataShape`] (internal invariant violation)
    /// or [`TableSurveyorError::Configuration`] (worker pool construction)
    /// can be returned; bad cell data never fails a run.
    pub fn analyze(&self, table: &Table) -> Result<QualityReport> {
        self.analyze_at(table, Utc::now())
    }

    /// Analyzes a table with an explicit report timestamp.
    ///
    /// Two runs over the same table with the same timestamp produce
    /// identical reports, which makes this the seam for reproducibility
    /// tests and for callers that batch multiple datasets under one clock
    /// reading.
    pub fn analyze_at(&self, table: &Table, generated_at: DateTime<Utc>) -> Result<QualityReport> {
        let profiles = if self.config.parallel && table.column_count() > 1 {
            self.profile_columns_parallel(table)?
        } else {
            table.columns().iter().map(guarded_profile).collect()
        };

        let issues = detect_issues(&profiles);
        build_report(
            table.source(),
            table.row_count(),
            table.column_count(),
            profiles,
            issues,
            generated_at,
        )
    }

    /// Profiles all columns across a fixed-size worker pool.
    ///
    /// The parallel map yields profiles in column order; there is no shared
    /// mutable state to synchronize beyond the final join.
    fn profile_columns_parallel(&self, table: &Table) -> Result<Vec<ColumnProfile>> {
        let threads = self.config.worker_threads.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, std::num::NonZero::get)
        });

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| {
                TableSurveyorError::configuration(format!("failed to build worker pool: {e}"))
            })?;

        Ok(pool.install(|| table.columns().par_iter().map(guarded_profile).collect()))
    }
}

/// Profiles one column, degrading to a minimal profile if profiling panics.
///
/// A defect while profiling one column must not abort the whole run; the
/// failed column is reported as fully null with a score of 0 and the other
/// columns proceed normally.
fn guarded_profile(column: &Column) -> ColumnProfile {
    match catch_unwind(AssertUnwindSafe(|| profile_column(column))) {
        Ok(profile) => profile,
        Err(_) => {
            tracing::warn!(
                "profiling failed for column '{}'; emitting degraded profile",
                column.name()
            );
            degraded_profile(column.name(), column.kind(), column.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn fixed_timestamp() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn sample_table() -> Table {
        Table::new(
            "users.csv",
            vec![
                Column::numeric("id", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
                Column::text(
                    "email",
                    vec![
                        Some("a@b.com".to_string()),
                        Some("c@d.org".to_string()),
                        None,
                        Some("e@f.net".to_string()),
                    ],
                ),
                Column::boolean("active", vec![Some(true), Some(false), Some(true), None]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_engine_full_run() {
        let engine = QualityEngine::with_defaults();
        let report = engine.analyze(&sample_table()).unwrap();

        assert_eq!(report.source, "users.csv");
        assert_eq!(report.row_count, 4);
        assert_eq!(report.column_count, 3);
        assert_eq!(report.columns.len(), 3);
        assert!(report.overall_score > 0.0);
        assert!(report.overall_score <= 100.0);
        assert!(report.columns[1].type_hints.unwrap().likely_email);
    }

    #[test]
    fn test_engine_preserves_column_order() {
        let engine = QualityEngine::with_defaults();
        let report = engine.analyze(&sample_table()).unwrap();

        let names: Vec<&str> = report.columns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "email", "active"]);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let table = sample_table();
        let at = fixed_timestamp();

        let sequential = QualityEngine::new(EngineConfig::new().with_parallel(false))
            .analyze_at(&table, at)
            .unwrap();
        let parallel = QualityEngine::new(EngineConfig::new().with_worker_threads(2))
            .analyze_at(&table, at)
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_table_run() {
        let engine = QualityEngine::with_defaults();
        let report = engine.analyze(&Table::empty("empty.csv")).unwrap();

        assert_eq!(report.overall_score, 0.0);
        assert!(report.columns.is_empty());
        assert!(report.issues.is_empty());
        assert_eq!(report.summary.total_issues, 0);
    }

    #[test]
    fn test_engine_issue_detection_wired() {
        let table = Table::new(
            "nulls.csv",
            vec![Column::text(
                "sparse",
                vec![Some("x".to_string()), None, None, None],
            )],
        )
        .unwrap();

        let report = QualityEngine::with_defaults().analyze(&table).unwrap();

        // 75% nulls trips the null rule; total - unique = 3 of 4 trips the
        // duplicate rule as well, in that order
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].column, "sparse");
        assert_eq!(report.issues[0].kind, crate::quality::IssueKind::HighNullPercentage);
        assert_eq!(report.issues[1].kind, crate::quality::IssueKind::HighDuplicates);
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new()
            .with_parallel(false)
            .with_worker_threads(4);
        assert!(!config.parallel);
        assert_eq!(config.worker_threads, Some(4));

        let engine = QualityEngine::new(config);
        assert!(!engine.config().parallel);
    }
}
