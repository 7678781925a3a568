//! JSON export of the reconciled result set.
//!
//! Machine-readable counterpart of the text report: panel configuration,
//! header metadata in supplied order, one entry per reconciled period, and
//! the aggregate summary.

use crate::types::{AggregateResult, PanelConfig, ReconciledRecord};
use std::fs::File;
use std::path::Path;

/// Export the run result as pretty-printed JSON.
///
/// # Arguments
/// * `records` - Reconciled records in pipeline order
/// * `aggregate` - Plant-wide totals
/// * `panel` - Panel configuration of the run
/// * `metadata` - Report header pairs, kept as an ordered array
/// * `path` - Path to write the JSON file
pub fn export_json_report(
    records: &[ReconciledRecord],
    aggregate: &AggregateResult,
    panel: &PanelConfig,
    metadata: &[(String, String)],
    path: &Path,
) -> std::io::Result<()> {
    use serde_json::json;

    let report = json!({
        "generated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "panel": panel,
        "metadata": metadata
            .iter()
            .map(|(key, value)| json!({ "key": key, "value": value }))
            .collect::<Vec<_>>(),
        "periods": records,
        "summary": {
            "total_expected": aggregate.total_expected,
            "total_actual": aggregate.total_actual,
            "overall_efficiency_percent": aggregate.overall_efficiency_percent,
        },
    });

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}
