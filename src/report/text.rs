//! Plain-text rendering: the canonical line sequence joined with newlines.

use super::types::StructuredReport;
use std::fs;
use std::path::Path;

/// Render the report as newline-delimited text with a trailing newline.
pub fn render_text(report: &StructuredReport) -> String {
    let mut text = report.lines().join("\n");
    text.push('\n');
    text
}

/// Write the text artifact.
pub fn write_text_report(report: &StructuredReport, path: &Path) -> std::io::Result<()> {
    fs::write(path, render_text(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportOptions, build_report};
    use crate::types::{AggregateResult, PanelConfig, ReconciledRecord};

    fn sample_report() -> StructuredReport {
        let records = vec![ReconciledRecord {
            period: "Jan".to_string(),
            irradiance: 150.0,
            expected: 432.0,
            actual: 400.0,
            efficiency_percent: 400.0 / 432.0 * 100.0,
        }];
        let aggregate = AggregateResult {
            total_expected: 432.0,
            total_actual: 400.0,
            overall_efficiency_percent: 400.0 / 432.0 * 100.0,
        };
        let panel = PanelConfig {
            power_watts: 400.0,
            efficiency_percent: 18.0,
            panel_count: 10,
            panel_area_m2: 1.6,
        };
        build_report(&records, &aggregate, &panel, &[], ReportOptions::default())
    }

    #[test]
    fn test_render_text_ends_with_single_newline() {
        let text = render_text(&sample_report());
        assert!(text.ends_with("Overall Efficiency: 92.59%\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_render_text_matches_lines() {
        let report = sample_report();
        let text = render_text(&report);
        let rendered: Vec<&str> = text.lines().collect();
        let expected: Vec<String> = report.lines();
        assert_eq!(rendered, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_write_text_report_round_trips_bytes() {
        let report = sample_report();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        write_text_report(&report, &path).expect("write");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, render_text(&report));
    }
}
