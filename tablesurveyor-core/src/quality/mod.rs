//! Data quality analysis.
//!
//! This module provides per-column statistical profiling and report
//! generation for in-memory tables:
//! - **Profiling**: null density, distinct/duplicate counts, numeric summary
//! - **Outlier detection**: interquartile-range fences on numeric columns
//! - **Type sniffing**: email-like / date-like hints for textual columns
//! - **Scoring**: a heuristic 0-100 health score per column
//! - **Issue detection**: structured findings when fixed thresholds are crossed
//!
//! All outputs contain counts, ratios and aggregates only, never individual
//! cell values.
//!
//! # Example
//! ```rust,ignore
//! use tablesurveyor_core::quality::QualityEngine;
//!
//! let engine = QualityEngine::with_defaults();
//! let report = engine.analyze(&table)?;
//! println!("Overall score: {}/100", report.overall_score);
//! ```

mod engine;
mod issues;
mod models;
mod outliers;
mod profiler;
mod report;
mod score;
mod sniff;

// Re-export public API
pub use engine::{EngineConfig, QualityEngine};
pub use issues::detect_issues;
pub use models::{
    ColumnProfile, Issue, IssueKind, IssueSeverity, NumericSummary, QualityReport, ReportSummary,
    TypeHints,
};
pub use outliers::detect_outliers;
pub use profiler::profile_column;
pub use report::build_report;
pub use score::quality_score;
pub use sniff::{is_date_like, is_email_like, sniff_sample, SNIFF_SAMPLE_LIMIT};
