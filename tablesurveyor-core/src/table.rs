//! In-memory columnar table model.
//!
//! A [`Table`] is the engine's input contract: an ordered sequence of named
//! columns, each a tagged-union array of nullable cells, all of equal length.
//! Tables are produced by an external loader (CSV, JSON, or any tabular
//! source) and are immutable once constructed; the engine never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableSurveyorError};

/// Logical kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// 64-bit floating point values
    Numeric,
    /// UTF-8 string values
    Text,
    /// Boolean values
    Boolean,
    /// UTC timestamps
    Temporal,
}

impl ColumnKind {
    /// Returns the lowercase name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Temporal => "temporal",
        }
    }
}

/// Cell storage for one column.
///
/// `None` slots are nulls. The variant fixes the column's [`ColumnKind`];
/// mixed-kind columns must be degraded to `Text` by the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// Numeric cells
    Numeric(Vec<Option<f64>>),
    /// Textual cells
    Text(Vec<Option<String>>),
    /// Boolean cells
    Boolean(Vec<Option<bool>>),
    /// Timestamp cells
    Temporal(Vec<Option<DateTime<Utc>>>),
}

impl ColumnValues {
    /// Number of cells, including nulls.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Boolean(v) => v.len(),
            ColumnValues::Temporal(v) => v.len(),
        }
    }

    /// Returns true if the column has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The [`ColumnKind`] implied by the storage variant.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnValues::Numeric(_) => ColumnKind::Numeric,
            ColumnValues::Text(_) => ColumnKind::Text,
            ColumnValues::Boolean(_) => ColumnKind::Boolean,
            ColumnValues::Temporal(_) => ColumnKind::Temporal,
        }
    }
}

/// A single named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    /// Creates a column from a name and cell storage.
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Creates a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnValues::Numeric(values))
    }

    /// Creates a textual column.
    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self::new(name, ColumnValues::Text(values))
    }

    /// Creates a boolean column.
    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self::new(name, ColumnValues::Boolean(values))
    }

    /// Creates a temporal column.
    pub fn temporal(name: impl Into<String>, values: Vec<Option<DateTime<Utc>>>) -> Self {
        Self::new(name, ColumnValues::Temporal(values))
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell storage.
    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    /// Logical kind of this column.
    pub fn kind(&self) -> ColumnKind {
        self.values.kind()
    }

    /// Number of cells, including nulls.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An immutable, in-memory tabular dataset.
///
/// Invariant: every column holds exactly `row_count()` cells. The constructor
/// rejects ragged input, so downstream profiling can rely on the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    source: String,
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table from a source identifier and columns.
    ///
    /// # Errors
    /// Returns [`TableSurveyorError::DataShape`] if the columns do not all
    /// have the same length. A ragged table indicates a loader defect, not
    /// bad user data.
    pub fn new(source: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(odd) = columns.iter().find(|c| c.len() != expected) {
                return Err(TableSurveyorError::data_shape(format!(
                    "column '{}' has {} rows, expected {}",
                    odd.name(),
                    odd.len(),
                    expected
                )));
            }
        }
        Ok(Self {
            source: source.into(),
            columns,
        })
    }

    /// Creates a table with no rows and no columns.
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            columns: Vec::new(),
        }
    }

    /// Identifier of the dataset this table was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Columns in load order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows (cells per column).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
