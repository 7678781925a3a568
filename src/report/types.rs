//! Report rendering model.
//!
//! `StructuredReport` is the single source every renderer draws from: a
//! metadata header in supplied order, one body row per reconciled record
//! in pipeline order, and the three aggregate figures. `lines()` is the
//! binding layout contract - text and PDF output must reproduce these
//! lines digit for digit.

use crate::types::{AggregateResult, PanelConfig, ReconciledRecord};
use unicode_width::UnicodeWidthStr;

/// Fixed first line of every report.
pub const REPORT_TITLE: &str = "Solar Plant Efficiency Report";

const PERIOD_HEADER: &str = "Month";
const IRRADIANCE_HEADER: &str = "Irradiance";
const EXPECTED_HEADER: &str = "Expected";
const ACTUAL_HEADER: &str = "Actual";
const EFFICIENCY_HEADER: &str = "Efficiency";

/// Renderer options; the per-period efficiency column is the one surface
/// difference between the report variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub efficiency_column: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { efficiency_column: true }
    }
}

/// Complete rendering model for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredReport {
    pub title: String,
    /// Header pairs, rendered in exactly this order.
    pub metadata: Vec<(String, String)>,
    /// One row per reconciled record, in pipeline order.
    pub rows: Vec<ReconciledRecord>,
    pub total_expected: f64,
    pub total_actual: f64,
    pub overall_efficiency_percent: f64,
    pub options: ReportOptions,
}

/// Build the rendering model. Caller metadata comes first, in supplied
/// order, followed by the panel specification block the original report
/// always carried.
pub fn build_report(
    records: &[ReconciledRecord],
    aggregate: &AggregateResult,
    panel: &PanelConfig,
    metadata: &[(String, String)],
    options: ReportOptions,
) -> StructuredReport {
    let mut pairs: Vec<(String, String)> = metadata.to_vec();
    pairs.push(("Panel Power".to_string(), format!("{} W", format_setting(panel.power_watts))));
    pairs.push(("Efficiency".to_string(), format!("{}%", format_setting(panel.efficiency_percent))));
    pairs.push(("Panels".to_string(), panel.panel_count.to_string()));

    StructuredReport {
        title: REPORT_TITLE.to_string(),
        metadata: pairs,
        rows: records.to_vec(),
        total_expected: aggregate.total_expected,
        total_actual: aggregate.total_actual,
        overall_efficiency_percent: aggregate.overall_efficiency_percent,
        options,
    }
}

/// Panel settings print without forced decimals: whole numbers as "400",
/// everything else as entered ("18.5").
fn format_setting(value: f64) -> String {
    if value.fract() == 0.0 { format!("{:.0}", value) } else { format!("{}", value) }
}

impl StructuredReport {
    /// The canonical, unbounded ordered line sequence. Pagination is the
    /// renderer's business; this layout is the byte contract.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(self.title.clone());
        for (key, value) in &self.metadata {
            lines.push(format!("{}: {}", key, value));
        }
        lines.push(String::new());

        let widths = ColumnWidths::measure(self);
        let header = widths.header_line(self.options.efficiency_column);
        let rule_len = UnicodeWidthStr::width(header.as_str());
        lines.push(header);
        lines.push("-".repeat(rule_len));
        for row in &self.rows {
            lines.push(widths.body_line(row, self.options.efficiency_column));
        }

        lines.push(String::new());
        lines.push(format!("Total Expected: {:.2} kWh", self.total_expected));
        lines.push(format!("Total Actual: {:.2} kWh", self.total_actual));
        lines.push(format!("Overall Efficiency: {:.2}%", self.overall_efficiency_percent));

        lines
    }
}

/// Column widths measured from the data, so the table is as wide as its
/// widest cell and no wider - deterministic for a given result set.
struct ColumnWidths {
    period: usize,
    irradiance: usize,
    expected: usize,
    actual: usize,
    efficiency: usize,
}

impl ColumnWidths {
    fn measure(report: &StructuredReport) -> Self {
        let mut widths = ColumnWidths {
            period: UnicodeWidthStr::width(PERIOD_HEADER),
            irradiance: IRRADIANCE_HEADER.len(),
            expected: EXPECTED_HEADER.len(),
            actual: ACTUAL_HEADER.len(),
            efficiency: EFFICIENCY_HEADER.len(),
        };

        for row in &report.rows {
            widths.period = widths.period.max(UnicodeWidthStr::width(row.period.as_str()));
            widths.irradiance = widths.irradiance.max(energy_cell(row.irradiance).len());
            widths.expected = widths.expected.max(energy_cell(row.expected).len());
            widths.actual = widths.actual.max(energy_cell(row.actual).len());
            widths.efficiency = widths.efficiency.max(percent_cell(row.efficiency_percent).len());
        }

        widths
    }

    fn header_line(&self, efficiency_column: bool) -> String {
        let mut line = format!(
            "{} | {:>iw$} | {:>ew$} | {:>aw$}",
            pad_label(PERIOD_HEADER, self.period),
            IRRADIANCE_HEADER,
            EXPECTED_HEADER,
            ACTUAL_HEADER,
            iw = self.irradiance,
            ew = self.expected,
            aw = self.actual,
        );
        if efficiency_column {
            line.push_str(&format!(" | {:>fw$}", EFFICIENCY_HEADER, fw = self.efficiency));
        }
        line
    }

    fn body_line(&self, row: &ReconciledRecord, efficiency_column: bool) -> String {
        let mut line = format!(
            "{} | {:>iw$} | {:>ew$} | {:>aw$}",
            pad_label(&row.period, self.period),
            energy_cell(row.irradiance),
            energy_cell(row.expected),
            energy_cell(row.actual),
            iw = self.irradiance,
            ew = self.expected,
            aw = self.actual,
        );
        if efficiency_column {
            line.push_str(&format!(" | {:>fw$}", percent_cell(row.efficiency_percent), fw = self.efficiency));
        }
        line
    }
}

/// Energies carry exactly 2 decimal places.
fn energy_cell(value: f64) -> String {
    format!("{:.2}", value)
}

/// Percentages carry exactly 2 decimal places and a trailing '%'.
fn percent_cell(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Left-align a label by display width, not byte length.
fn pad_label(label: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(label));
    let mut cell = String::with_capacity(label.len() + pad);
    cell.push_str(label);
    for _ in 0..pad {
        cell.push(' ');
    }
    cell
}
