//! Typed failures for the reconciliation pipeline.
//!
//! Every core stage reports through `PipelineError`; a run either produces
//! a complete result or one of these. There is no partial-result or retry
//! semantic, and nothing is silently swallowed except the documented
//! zero-division guard in the calculator.

use std::fmt;
use thiserror::Error;

/// Which input table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Irradiance,
    Generation,
}

impl TableRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableRole::Irradiance => "irradiance",
            TableRole::Generation => "generation",
        }
    }
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of a pipeline run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A required column is absent from one of the input tables.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn { table: TableRole, column: String },

    /// The two tables do not describe the same duplicate-free period set.
    #[error("period labels do not line up between the tables: {detail}")]
    PeriodMismatch { detail: String },

    /// A key lookup during the join yielded zero or multiple rows.
    /// Validation should make this unreachable; the merger still checks.
    #[error("join for period '{period}' matched {matches} rows in the {table} table, expected exactly 1")]
    JoinIntegrity {
        period: String,
        table: TableRole,
        matches: usize,
    },

    /// A measure cell did not parse as a finite, non-negative number.
    #[error("period '{period}' has an invalid {field} value: {detail}")]
    InvalidValue {
        period: String,
        field: String,
        detail: String,
    },
}
