//! Input validation: schema and period alignment.
//!
//! Checks that both tables carry their required columns and describe the
//! same duplicate-free set of periods. Column checks run before period
//! checks so the caller always sees the most structural problem first.

use crate::error::{PipelineError, TableRole};
use crate::table::{ACTUAL_GENERATION_COLUMN, IRRADIANCE_COLUMN, InputTable, MONTH_COLUMN};
use std::collections::HashSet;

/// Validate the two input tables against each other.
///
/// On success returns the ordered period labels, taken from the irradiance
/// table's row order. The tables themselves are borrowed and unchanged;
/// this is a pure function of its inputs.
pub fn validate(
    irradiance: &InputTable,
    generation: &InputTable,
) -> Result<Vec<String>, PipelineError> {
    require_column(irradiance, TableRole::Irradiance, MONTH_COLUMN)?;
    require_column(irradiance, TableRole::Irradiance, IRRADIANCE_COLUMN)?;
    require_column(generation, TableRole::Generation, MONTH_COLUMN)?;
    require_column(generation, TableRole::Generation, ACTUAL_GENERATION_COLUMN)?;

    if irradiance.row_count() != generation.row_count() {
        return Err(PipelineError::PeriodMismatch {
            detail: format!(
                "irradiance table has {} rows, generation table has {}",
                irradiance.row_count(),
                generation.row_count()
            ),
        });
    }

    let irradiance_periods = period_labels(irradiance, TableRole::Irradiance)?;
    let generation_periods = period_labels(generation, TableRole::Generation)?;

    let generation_set: HashSet<&str> = generation_periods.iter().map(String::as_str).collect();
    let irradiance_set: HashSet<&str> = irradiance_periods.iter().map(String::as_str).collect();

    // Row-order iteration keeps the message deterministic.
    let only_irradiance: Vec<&str> = irradiance_periods
        .iter()
        .map(String::as_str)
        .filter(|p| !generation_set.contains(p))
        .collect();
    let only_generation: Vec<&str> = generation_periods
        .iter()
        .map(String::as_str)
        .filter(|p| !irradiance_set.contains(p))
        .collect();

    if !only_irradiance.is_empty() || !only_generation.is_empty() {
        let mut parts = Vec::new();
        if !only_irradiance.is_empty() {
            parts.push(format!("only in irradiance table: {}", only_irradiance.join(", ")));
        }
        if !only_generation.is_empty() {
            parts.push(format!("only in generation table: {}", only_generation.join(", ")));
        }
        return Err(PipelineError::PeriodMismatch { detail: parts.join("; ") });
    }

    Ok(irradiance_periods)
}

fn require_column(
    table: &InputTable,
    role: TableRole,
    column: &str,
) -> Result<(), PipelineError> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(PipelineError::MissingColumn {
            table: role,
            column: column.to_string(),
        })
    }
}

/// Period labels of one table in row order, rejecting duplicates.
fn period_labels(table: &InputTable, role: TableRole) -> Result<Vec<String>, PipelineError> {
    // Unwrap-free: the caller has already established the column exists.
    let month_index = table.column_index(MONTH_COLUMN).ok_or_else(|| {
        PipelineError::MissingColumn {
            table: role,
            column: MONTH_COLUMN.to_string(),
        }
    })?;

    let mut labels = Vec::with_capacity(table.row_count());
    let mut seen: HashSet<String> = HashSet::new();
    for row in 0..table.row_count() {
        let label = table.cell(row, month_index).to_string();
        if !seen.insert(label.clone()) {
            return Err(PipelineError::PeriodMismatch {
                detail: format!("period '{}' appears more than once in the {} table", label, role),
            });
        }
        labels.push(label);
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> InputTable {
        InputTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        )
    }

    fn irradiance_table() -> InputTable {
        table(&["Month", "Irradiance"], &[&["Jan", "150"], &["Feb", "160"]])
    }

    fn generation_table() -> InputTable {
        table(&["Month", "ActualGeneration"], &[&["Jan", "400"], &["Feb", "410"]])
    }

    #[test]
    fn test_valid_tables_return_irradiance_order() {
        let periods = validate(&irradiance_table(), &generation_table()).expect("valid");
        assert_eq!(periods, vec!["Jan".to_string(), "Feb".to_string()]);
    }

    #[test]
    fn test_period_order_ignores_generation_row_order() {
        let generation = table(&["Month", "ActualGeneration"], &[&["Feb", "410"], &["Jan", "400"]]);
        let periods = validate(&irradiance_table(), &generation).expect("valid");
        assert_eq!(periods, vec!["Jan".to_string(), "Feb".to_string()]);
    }

    #[test]
    fn test_missing_month_column() {
        let bad = table(&["Period", "Irradiance"], &[&["Jan", "150"]]);
        let err = validate(&bad, &generation_table()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::MissingColumn {
                table: TableRole::Irradiance,
                column: "Month".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_measure_column() {
        let bad = table(&["Month", "Generation"], &[&["Jan", "400"], &["Feb", "410"]]);
        let err = validate(&irradiance_table(), &bad).unwrap_err();
        assert_eq!(
            err,
            PipelineError::MissingColumn {
                table: TableRole::Generation,
                column: "ActualGeneration".to_string(),
            }
        );
    }

    #[test]
    fn test_row_count_mismatch() {
        let generation = table(&["Month", "ActualGeneration"], &[&["Jan", "400"]]);
        let err = validate(&irradiance_table(), &generation).unwrap_err();
        assert!(matches!(err, PipelineError::PeriodMismatch { .. }));
    }

    #[test]
    fn test_duplicate_period_rejected() {
        let generation = table(&["Month", "ActualGeneration"], &[&["Jan", "400"], &["Jan", "410"]]);
        let err = validate(&irradiance_table(), &generation).unwrap_err();
        match err {
            PipelineError::PeriodMismatch { detail } => {
                assert!(detail.contains("'Jan'"));
                assert!(detail.contains("generation"));
            }
            other => panic!("expected PeriodMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_period_sets() {
        let generation = table(&["Month", "ActualGeneration"], &[&["Jan", "400"], &["Mar", "410"]]);
        let err = validate(&irradiance_table(), &generation).unwrap_err();
        match err {
            PipelineError::PeriodMismatch { detail } => {
                assert!(detail.contains("only in irradiance table: Feb"));
                assert!(detail.contains("only in generation table: Mar"));
            }
            other => panic!("expected PeriodMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tables_are_valid() {
        let irradiance = table(&["Month", "Irradiance"], &[]);
        let generation = table(&["Month", "ActualGeneration"], &[]);
        let periods = validate(&irradiance, &generation).expect("valid");
        assert!(periods.is_empty());
    }
}
