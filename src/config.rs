/// Run-configuration resolution module
///
/// This module handles:
/// - Building a RunConfig from CLI arguments
/// - Validating panel parameters
/// - Assembling the report header metadata in its final order
///
/// Everything is resolved upfront, so the pipeline receives a fully
/// validated, immutable run description.
use crate::cli::CliArgs;
use crate::report::ReportOptions;
use crate::types::PanelConfig;
use log::debug;
use std::path::PathBuf;

/// Immutable description of one run: panel parameters, report header
/// metadata, renderer options, and output paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub panel: PanelConfig,
    pub metadata: Vec<(String, String)>,
    pub options: ReportOptions,
    pub text_path: PathBuf,
    pub pdf_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub chart_path: Option<PathBuf>,
    pub quiet: bool,
}

/// Build a complete RunConfig from CLI arguments
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig, String> {
    debug!("Building run config from CLI args");

    let panel = resolve_panel(args)?;
    debug!("Effective area factor: {}", panel.effective_area_factor());

    let metadata = resolve_metadata(args)?;
    debug!("Resolved {} metadata pairs", metadata.len());

    Ok(RunConfig {
        panel,
        metadata,
        options: ReportOptions { efficiency_column: !args.no_efficiency_column },
        text_path: args.output.clone(),
        pdf_path: args.pdf.clone(),
        json_path: args.json.clone(),
        chart_path: args.chart.clone(),
        quiet: args.quiet,
    })
}

fn resolve_panel(args: &CliArgs) -> Result<PanelConfig, String> {
    if !(args.panel_power > 0.0) {
        return Err(format!("panel power must be positive, got {}", args.panel_power));
    }
    if !(0.0..=100.0).contains(&args.panel_efficiency) {
        return Err(format!(
            "panel efficiency must be between 0 and 100, got {}",
            args.panel_efficiency
        ));
    }
    if args.panel_count == 0 {
        return Err("panel count must be positive".to_string());
    }
    if !(args.panel_area > 0.0) {
        return Err(format!("panel area must be positive, got {}", args.panel_area));
    }

    Ok(PanelConfig {
        power_watts: args.panel_power,
        efficiency_percent: args.panel_efficiency,
        panel_count: args.panel_count,
        panel_area_m2: args.panel_area,
    })
}

/// Header pairs in their final render order: plant name and panel model
/// first when given, then the --meta pairs in command-line order. The
/// panel specification block is appended by the report builder.
fn resolve_metadata(args: &CliArgs) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();

    if let Some(ref name) = args.plant_name {
        pairs.push(("Plant".to_string(), name.clone()));
    }
    if let Some(ref model) = args.panel_model {
        pairs.push(("Model".to_string(), model.clone()));
    }

    for entry in &args.meta {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("--meta expects KEY=VALUE, got '{}'", entry))?;
        if key.is_empty() {
            return Err(format!("--meta expects a non-empty key, got '{}'", entry));
        }
        pairs.push((key.to_string(), value.to_string()));
    }

    Ok(pairs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
