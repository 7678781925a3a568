//! Tabular input as read from CSV.
//!
//! This is the file-ingestion layer in front of the pipeline: it turns a
//! headered CSV file into an `InputTable` of raw string cells and nothing
//! more. Schema checks belong to the validator, numeric parsing to the
//! calculator.

use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Period key column, required on both tables.
pub const MONTH_COLUMN: &str = "Month";
/// Measure column of the irradiance table.
pub const IRRADIANCE_COLUMN: &str = "Irradiance";
/// Measure column of the generation table.
pub const ACTUAL_GENERATION_COLUMN: &str = "ActualGeneration";

/// Failure to read an input file. Distinct from `PipelineError`: this is
/// the ingestion collaborator's error space, not the core pipeline's.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {source}")]
    Parse { path: PathBuf, source: csv::Error },
}

/// A headered table of raw string cells, in file row order.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl InputTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (row, column), empty string when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Read a headered CSV file into an `InputTable`, trimming cell whitespace.
/// The reader is strict about row width, so every returned row has exactly
/// one cell per header.
pub fn load_table(path: &Path) -> Result<InputTable, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(InputTable::new(headers, rows))
}
