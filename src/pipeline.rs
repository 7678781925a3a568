//! End-to-end reconciliation: validate, merge, compute.
//!
//! Data flows strictly validator -> merger -> calculator; no stage keeps
//! state between runs and everything travels through arguments and return
//! values, so concurrent invocations are safe by construction.

use crate::compute;
use crate::error::PipelineError;
use crate::merge;
use crate::table::InputTable;
use crate::types::{AggregateResult, PanelConfig, ReconciledRecord};
use crate::validate;
use log::debug;

/// Run the full pipeline over two validated-at-runtime input tables.
pub fn reconcile(
    irradiance: &InputTable,
    generation: &InputTable,
    panel: &PanelConfig,
) -> Result<(Vec<ReconciledRecord>, AggregateResult), PipelineError> {
    let order = validate::validate(irradiance, generation)?;
    debug!("validated {} periods", order.len());

    let records = merge::merge(irradiance, generation, &order)?;
    debug!("merged {} records", records.len());

    compute::compute(&records, panel)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
