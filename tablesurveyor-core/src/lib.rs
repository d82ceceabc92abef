//! Data quality analysis engine for in-memory tabular datasets.
//!
//! This crate audits the structural and statistical quality of a loaded
//! [`Table`] - null density, duplication, IQR outliers, heuristic type
//! hints - and aggregates the results into a structured [`quality::QualityReport`].
//! It performs no I/O: decoding concrete file formats into a `Table` and
//! rendering the report are the responsibility of the surrounding tooling.
//!
//! # Architecture
//! The engine is a pure, synchronous batch computation:
//! - `Table` in, `QualityReport` out; both are plain data contracts
//! - Per-column profiling is embarrassingly parallel and may fan out across
//!   a worker pool, with profiles rejoined in column order
//! - A defect in one column degrades that column, never the run
//!
//! # Example
//! ```rust
//! use tablesurveyor_core::{Column, Table};
//! use tablesurveyor_core::quality::QualityEngine;
//!
//! let table = Table::new(
//!     "demo.csv",
//!     vec![Column::numeric("id", vec![Some(1.0), Some(2.0), None])],
//! )
//! .unwrap();
//!
//! let report = QualityEngine::with_defaults().analyze(&table).unwrap();
//! assert_eq!(report.column_count, 1);
//! ```

pub mod error;
pub mod logging;
pub mod quality;
pub mod table;

// Re-export commonly used types
pub use error::{Result, TableSurveyorError};
pub use table::{Column, ColumnKind, ColumnValues, Table};
