use crate::types::DEFAULT_PANEL_AREA_M2;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "solar-efficiency")]
#[command(about = "Compare expected vs actual solar generation and report per-month efficiency")]
#[command(version)]
pub struct CliArgs {
    /// CSV with columns "Month,Irradiance" (measured energy per unit area per month)
    #[arg(long, value_name = "PATH")]
    pub irradiance: PathBuf,

    /// CSV with columns "Month,ActualGeneration" (measured energy per month)
    #[arg(long, value_name = "PATH")]
    pub generation: PathBuf,

    /// Rated power of a single panel in watts (shown in the report header only)
    #[arg(long, default_value = "400")]
    pub panel_power: f64,

    /// Rated panel efficiency in percent (0-100)
    #[arg(long, default_value = "18")]
    pub panel_efficiency: f64,

    /// Number of installed panels
    #[arg(long, default_value = "10")]
    pub panel_count: u32,

    /// Surface area of a single panel in square meters
    #[arg(long, default_value_t = DEFAULT_PANEL_AREA_M2)]
    pub panel_area: f64,

    /// Plant name shown in the report header
    #[arg(long, value_name = "NAME")]
    pub plant_name: Option<String>,

    /// Panel model shown in the report header
    #[arg(long, value_name = "MODEL")]
    pub panel_model: Option<String>,

    /// Extra report header entries, in the given order
    /// Can specify multiple: --meta Site=North --meta Operator=ACME
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,

    /// Text report output path
    #[arg(long, default_value = "solar-report.txt")]
    pub output: PathBuf,

    /// Also write a paginated A4 PDF report to this path
    #[arg(long, value_name = "PATH")]
    pub pdf: Option<PathBuf>,

    /// Also write the reconciled result set as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Also write an SVG generation chart to this path
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Leave the per-month efficiency column out of the report body
    #[arg(long)]
    pub no_efficiency_column: bool,

    /// Don't echo the report to the console
    #[arg(long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if !self.irradiance.exists() {
            return Err(format!("irradiance file not found: {}", self.irradiance.display()));
        }
        if !self.generation.exists() {
            return Err(format!("generation file not found: {}", self.generation.display()));
        }

        for entry in &self.meta {
            match entry.split_once('=') {
                Some((key, _)) if !key.is_empty() => {}
                _ => return Err(format!("--meta expects KEY=VALUE, got '{}'", entry)),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_inputs(irradiance: PathBuf, generation: PathBuf) -> CliArgs {
        CliArgs {
            irradiance,
            generation,
            panel_power: 400.0,
            panel_efficiency: 18.0,
            panel_count: 10,
            panel_area: 1.6,
            plant_name: None,
            panel_model: None,
            meta: vec![],
            output: PathBuf::from("solar-report.txt"),
            pdf: None,
            json: None,
            chart: None,
            no_efficiency_column: false,
            quiet: false,
        }
    }

    fn existing_inputs() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let irradiance = dir.path().join("irradiance.csv");
        let generation = dir.path().join("generation.csv");
        std::fs::write(&irradiance, "Month,Irradiance\n").expect("write");
        std::fs::write(&generation, "Month,ActualGeneration\n").expect("write");
        (dir, irradiance, generation)
    }

    #[test]
    fn test_validate_missing_input_file_fails() {
        let args = args_with_inputs(PathBuf::from("/nonexistent/a.csv"), PathBuf::from("/nonexistent/b.csv"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_existing_inputs_succeed() {
        let (_dir, irradiance, generation) = existing_inputs();
        let args = args_with_inputs(irradiance, generation);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_meta() {
        let (_dir, irradiance, generation) = existing_inputs();
        let mut args = args_with_inputs(irradiance, generation);
        args.meta = vec!["SiteNorth".to_string()];
        let err = args.validate().unwrap_err();
        assert!(err.contains("KEY=VALUE"));
    }

    #[test]
    fn test_validate_accepts_meta_with_empty_value() {
        let (_dir, irradiance, generation) = existing_inputs();
        let mut args = args_with_inputs(irradiance, generation);
        args.meta = vec!["Site=".to_string()];
        assert!(args.validate().is_ok());
    }
}
