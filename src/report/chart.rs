//! SVG generation chart.
//!
//! Draws paired expected/actual bars per period. The expected bar's fill
//! follows the per-period efficiency on a red-to-green scale, the actual
//! bar stays a fixed blue, mirroring the comparison chart the report has
//! always shipped with. Read-only over the reconciled records.

use crate::types::ReconciledRecord;
use std::fs;
use std::path::Path;

const MARGIN_LEFT: i64 = 50;
const MARGIN_RIGHT: i64 = 20;
const MARGIN_TOP: i64 = 40;
const MARGIN_BOTTOM: i64 = 40;
const PLOT_HEIGHT: i64 = 280;
const GROUP_WIDTH: i64 = 70;
const BAR_WIDTH: i64 = 24;
const BAR_GAP: i64 = 4;

const ACTUAL_FILL: &str = "#4477aa";

// Red, yellow and green anchor points of the efficiency scale.
const SCALE_LOW: (f64, f64, f64) = (211.0, 47.0, 47.0);
const SCALE_MID: (f64, f64, f64) = (251.0, 192.0, 45.0);
const SCALE_HIGH: (f64, f64, f64) = (56.0, 142.0, 60.0);

/// Fill color for a bar at the given efficiency: red at 0, yellow at 50,
/// green at 100 and beyond. Input outside 0-100 is clamped.
pub fn efficiency_color(efficiency_percent: f64) -> String {
    let t = (efficiency_percent / 100.0).clamp(0.0, 1.0);
    let (from, to, s) = if t <= 0.5 {
        (SCALE_LOW, SCALE_MID, t / 0.5)
    } else {
        (SCALE_MID, SCALE_HIGH, (t - 0.5) / 0.5)
    };
    let r = (from.0 + (to.0 - from.0) * s).round() as u8;
    let g = (from.1 + (to.1 - from.1) * s).round() as u8;
    let b = (from.2 + (to.2 - from.2) * s).round() as u8;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Render the chart as an SVG document.
pub fn render_chart(records: &[ReconciledRecord]) -> String {
    let width = MARGIN_LEFT + MARGIN_RIGHT + GROUP_WIDTH * records.len().max(1) as i64;
    let height = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + PLOT_HEIGHT;

    let max_value = records
        .iter()
        .flat_map(|r| [r.expected, r.actual])
        .fold(0.0f64, f64::max)
        .max(1.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"0 0 {} {}\">\n",
        width, height, width, height
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"24\" font-family=\"sans-serif\" font-size=\"16\" \
         text-anchor=\"middle\">Monthly Generation: Expected vs Actual</text>\n",
        width / 2
    ));
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#333333\"/>\n",
        MARGIN_LEFT,
        baseline,
        width - MARGIN_RIGHT,
        baseline
    ));

    for (index, record) in records.iter().enumerate() {
        let group_x = MARGIN_LEFT + GROUP_WIDTH * index as i64;
        let expected_height = scaled_height(record.expected, max_value);
        let actual_height = scaled_height(record.actual, max_value);
        let expected_x = group_x + (GROUP_WIDTH - 2 * BAR_WIDTH - BAR_GAP) / 2;
        let actual_x = expected_x + BAR_WIDTH + BAR_GAP;

        svg.push_str(&format!(
            "  <rect class=\"bar-expected\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             fill=\"{}\" fill-opacity=\"0.6\"/>\n",
            expected_x,
            baseline - expected_height,
            BAR_WIDTH,
            expected_height,
            efficiency_color(record.efficiency_percent)
        ));
        svg.push_str(&format!(
            "  <rect class=\"bar-actual\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             fill=\"{}\" fill-opacity=\"0.6\"/>\n",
            actual_x,
            baseline - actual_height,
            BAR_WIDTH,
            actual_height,
            ACTUAL_FILL
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"12\" \
             text-anchor=\"middle\">{}</text>\n",
            group_x + GROUP_WIDTH / 2,
            baseline + 16,
            escape_xml(&record.period)
        ));
    }

    // Legend in the top-left corner of the plot area.
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"12\" height=\"12\" fill=\"{}\" fill-opacity=\"0.6\"/>\n",
        MARGIN_LEFT,
        MARGIN_TOP - 6,
        efficiency_color(100.0)
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"12\">Expected</text>\n",
        MARGIN_LEFT + 18,
        MARGIN_TOP + 4
    ));
    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"12\" height=\"12\" fill=\"{}\" fill-opacity=\"0.6\"/>\n",
        MARGIN_LEFT + 90,
        MARGIN_TOP - 6,
        ACTUAL_FILL
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"12\">Actual</text>\n",
        MARGIN_LEFT + 108,
        MARGIN_TOP + 4
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Write the SVG artifact.
pub fn write_chart(records: &[ReconciledRecord], path: &Path) -> std::io::Result<()> {
    fs::write(path, render_chart(records))
}

fn scaled_height(value: f64, max_value: f64) -> i64 {
    ((value / max_value) * PLOT_HEIGHT as f64).round() as i64
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
