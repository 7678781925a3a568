//! Dataset merger: inner join of the two tables on the period label.
//!
//! Output order follows the validated period order (the irradiance table's
//! row order), never either table's insertion quirks, so the report stays
//! deterministic regardless of how the generation file was assembled.

use crate::error::{PipelineError, TableRole};
use crate::table::{ACTUAL_GENERATION_COLUMN, IRRADIANCE_COLUMN, InputTable, MONTH_COLUMN};
use crate::types::PeriodRecord;

/// Join the two tables into one `PeriodRecord` per period, in `order`.
///
/// Validation makes a bad lookup unreachable; the join still checks that
/// every key matches exactly one row in each table and reports
/// `JoinIntegrity` otherwise.
pub fn merge(
    irradiance: &InputTable,
    generation: &InputTable,
    order: &[String],
) -> Result<Vec<PeriodRecord>, PipelineError> {
    let irr_month = required_index(irradiance, TableRole::Irradiance, MONTH_COLUMN)?;
    let irr_value = required_index(irradiance, TableRole::Irradiance, IRRADIANCE_COLUMN)?;
    let gen_month = required_index(generation, TableRole::Generation, MONTH_COLUMN)?;
    let gen_value = required_index(generation, TableRole::Generation, ACTUAL_GENERATION_COLUMN)?;

    let mut records = Vec::with_capacity(order.len());
    for period in order {
        let irradiance_cell =
            single_match(irradiance, TableRole::Irradiance, irr_month, irr_value, period)?;
        let actual_cell =
            single_match(generation, TableRole::Generation, gen_month, gen_value, period)?;

        records.push(PeriodRecord {
            period: period.clone(),
            irradiance: irradiance_cell,
            actual: actual_cell,
        });
    }

    Ok(records)
}

fn required_index(
    table: &InputTable,
    role: TableRole,
    column: &str,
) -> Result<usize, PipelineError> {
    table.column_index(column).ok_or_else(|| PipelineError::MissingColumn {
        table: role,
        column: column.to_string(),
    })
}

/// The measure cell of the one row whose period label equals `period`.
fn single_match(
    table: &InputTable,
    role: TableRole,
    month_index: usize,
    value_index: usize,
    period: &str,
) -> Result<String, PipelineError> {
    let mut matched: Option<String> = None;
    let mut matches = 0usize;

    for row in 0..table.row_count() {
        if table.cell(row, month_index) == period {
            matches += 1;
            matched = Some(table.cell(row, value_index).to_string());
        }
    }

    match (matches, matched) {
        (1, Some(value)) => Ok(value),
        (n, _) => Err(PipelineError::JoinIntegrity {
            period: period.to_string(),
            table: role,
            matches: n,
        }),
    }
}
