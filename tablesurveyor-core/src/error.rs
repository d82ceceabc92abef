//! Error types for the quality analysis engine.
//!
//! The engine itself is a total computation over a well-formed [`crate::Table`];
//! the only failures it can surface are internal invariant violations and
//! configuration problems. Loader-side failures (unreadable files, unsupported
//! formats) belong to the surrounding tooling, never to this crate.

use thiserror::Error;

/// Main error type for tablesurveyor operations.
#[derive(Debug, Error)]
pub enum TableSurveyorError {
    /// Table/profile shape invariant violated.
    ///
    /// This indicates a defect in the profiling pipeline (for example a
    /// profile count that does not match the column count), not bad input
    /// data. Runs must abort when this is raised.
    #[error("table shape invariant violated: {context}")]
    DataShape {
        /// Description of the violated invariant
        context: String,
    },

    /// Configuration or initialization error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the problem
        message: String,
    },
}

/// Convenience type alias for Results with TableSurveyorError
pub type Result<T> = std::result::Result<T, TableSurveyorError>;

impl TableSurveyorError {
    /// Creates a shape-invariant violation error with context
    pub fn data_shape(context: impl Into<String>) -> Self {
        Self::DataShape {
            context: context.into(),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
