//! File loaders.
//!
//! Decodes CSV and JSON files into the engine's [`Table`] contract,
//! inferring a kind for each column (numeric, boolean, or textual) and
//! mapping empty or missing cells to nulls. Format decoding lives entirely
//! here; the engine only ever sees a well-formed table.

use std::fs;
use std::path::Path;

use tablesurveyor_core::{Column, Table, TableSurveyorError};
use thiserror::Error;

/// Errors raised while decoding an input file into a table.
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    /// File extension not recognized as a supported format
    #[error("unsupported input format: '{extension}' (expected csv or json)")]
    UnsupportedFormat {
        /// The offending extension
        extension: String,
    },

    /// File could not be read
    #[error("failed to read '{path}'")]
    Io {
        /// Path being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding failed
    #[error("failed to decode CSV")]
    Csv {
        /// Underlying CSV error
        #[from]
        source: csv::Error,
    },

    /// JSON decoding failed
    #[error("failed to decode JSON")]
    Json {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// JSON document is well-formed but not tabular
    #[error("input is not a tabular JSON document: {context}")]
    JsonShape {
        /// Description of the shape problem
        context: String,
    },

    /// Decoded columns failed the table shape invariant
    #[error(transparent)]
    Shape(#[from] TableSurveyorError),
}

/// Loads a table from a file, dispatching on the extension.
pub(crate) fn load_table(path: &Path) -> Result<Table, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let source = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    match extension.as_str() {
        "csv" => load_csv(path, source),
        "json" => load_json(path, source),
        _ => Err(LoadError::UnsupportedFormat { extension }),
    }
}

fn load_csv(path: &Path, source: String) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, column_cells) in cells.iter_mut().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            column_cells.push(if raw.trim().is_empty() {
                None
            } else {
                Some(raw.to_string())
            });
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| build_text_backed_column(name, values))
        .collect();
    Ok(Table::new(source, columns)?)
}

/// Infers the kind of a column decoded from text cells.
///
/// A column is numeric when every non-null cell parses as a finite float,
/// boolean when every non-null cell is true/false, and textual otherwise
/// (including all-null columns).
fn build_text_backed_column(name: String, values: Vec<Option<String>>) -> Column {
    let non_null: Vec<&str> = values.iter().flatten().map(String::as_str).collect();

    if !non_null.is_empty() && non_null.iter().all(|v| parse_numeric(v).is_some()) {
        let cells = values
            .iter()
            .map(|v| v.as_deref().and_then(parse_numeric))
            .collect();
        return Column::numeric(name, cells);
    }

    if !non_null.is_empty() && non_null.iter().all(|v| parse_boolean(v).is_some()) {
        let cells = values
            .iter()
            .map(|v| v.as_deref().and_then(parse_boolean))
            .collect();
        return Column::boolean(name, cells);
    }

    Column::text(name, values)
}

fn parse_numeric(raw: &str) -> Option<f64> {
    // "NaN" and "inf" parse as floats but would poison the statistics
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_boolean(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn load_json(path: &Path, source: String) -> Result<Table, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let document: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| LoadError::Json { source: e })?;

    let rows = document.as_array().ok_or_else(|| LoadError::JsonShape {
        context: "expected a top-level array of row objects".to_string(),
    })?;

    // Column order: first appearance across all rows
    let mut names: Vec<String> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let object = row.as_object().ok_or_else(|| LoadError::JsonShape {
            context: format!("row {idx} is not an object"),
        })?;
        for key in object.keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let raw: Vec<Option<&serde_json::Value>> = rows
                .iter()
                .map(|row| {
                    row.as_object()
                        .and_then(|o| o.get(&name))
                        .filter(|v| !v.is_null())
                })
                .collect();
            build_json_column(name, &raw)
        })
        .collect();

    Ok(Table::new(source, columns)?)
}

/// Infers the kind of a column decoded from JSON cells.
fn build_json_column(name: String, cells: &[Option<&serde_json::Value>]) -> Column {
    let non_null: Vec<&serde_json::Value> = cells.iter().flatten().copied().collect();

    if !non_null.is_empty() && non_null.iter().all(|v| v.is_number()) {
        let values = cells
            .iter()
            .map(|c| c.and_then(serde_json::Value::as_f64))
            .collect();
        return Column::numeric(name, values);
    }

    if !non_null.is_empty() && non_null.iter().all(|v| v.is_boolean()) {
        let values = cells
            .iter()
            .map(|c| c.and_then(serde_json::Value::as_bool))
            .collect();
        return Column::boolean(name, values);
    }

    let values = cells.iter().map(|c| c.map(json_cell_text)).collect();
    Column::text(name, values)
}

/// Textual representation of a non-string JSON cell in a mixed column.
fn json_cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
