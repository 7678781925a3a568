//! Efficiency calculator.
//!
//! Parses the merged measure cells and derives per-period expected
//! generation, per-period efficiency, and the plant-wide aggregate. A
//! period with zero expected generation gets efficiency 0 rather than an
//! error or NaN; that guard is a computation policy, not a failure path.

use crate::error::PipelineError;
use crate::table::{ACTUAL_GENERATION_COLUMN, IRRADIANCE_COLUMN};
use crate::types::{AggregateResult, PanelConfig, PeriodRecord, ReconciledRecord};

/// Compute reconciled records and the aggregate for one run.
///
/// Pure function of its inputs; summation runs in input order so output
/// formatting is reproducible across runs.
pub fn compute(
    records: &[PeriodRecord],
    panel: &PanelConfig,
) -> Result<(Vec<ReconciledRecord>, AggregateResult), PipelineError> {
    let factor = panel.effective_area_factor();

    let mut reconciled = Vec::with_capacity(records.len());
    let mut total_expected = 0.0f64;
    let mut total_actual = 0.0f64;

    for record in records {
        let irradiance = parse_measure(&record.period, IRRADIANCE_COLUMN, &record.irradiance)?;
        let actual = parse_measure(&record.period, ACTUAL_GENERATION_COLUMN, &record.actual)?;

        let expected = factor * irradiance;
        let efficiency_percent = if expected > 0.0 { actual / expected * 100.0 } else { 0.0 };

        total_expected += expected;
        total_actual += actual;

        reconciled.push(ReconciledRecord {
            period: record.period.clone(),
            irradiance,
            expected,
            actual,
            efficiency_percent,
        });
    }

    let overall_efficiency_percent =
        if total_expected > 0.0 { total_actual / total_expected * 100.0 } else { 0.0 };

    Ok((
        reconciled,
        AggregateResult {
            total_expected,
            total_actual,
            overall_efficiency_percent,
        },
    ))
}

/// Parse one measure cell. Both measures are declared non-negative, so a
/// negative or non-finite value is a data error, same as a non-numeric one.
fn parse_measure(period: &str, field: &str, raw: &str) -> Result<f64, PipelineError> {
    let value: f64 = raw.parse().map_err(|_| PipelineError::InvalidValue {
        period: period.to_string(),
        field: field.to_string(),
        detail: format!("'{}' is not a number", raw),
    })?;

    if !value.is_finite() {
        return Err(PipelineError::InvalidValue {
            period: period.to_string(),
            field: field.to_string(),
            detail: format!("'{}' is not finite", raw),
        });
    }

    if value < 0.0 {
        return Err(PipelineError::InvalidValue {
            period: period.to_string(),
            field: field.to_string(),
            detail: format!("{} is negative", value),
        });
    }

    Ok(value)
}
