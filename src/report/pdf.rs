//! Paginated PDF rendering.
//!
//! Lays the canonical line sequence onto fixed A4 pages in Courier,
//! breaking to a new page when the current one is full. The writer
//! emits a self-contained single-font PDF 1.4 document by hand; digits
//! come verbatim from `StructuredReport::lines()`, so the PDF and the
//! text artifact always agree.

use super::types::StructuredReport;
use std::fs;
use std::path::Path;

// A4 portrait in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 12;

/// Lines that fit between the top and bottom margin at the fixed leading.
pub fn lines_per_page() -> usize {
    ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize
}

/// Render the report as PDF bytes.
pub fn render_pdf(report: &StructuredReport) -> Vec<u8> {
    let lines = report.lines();
    let pages: Vec<&[String]> = lines.chunks(lines_per_page()).collect();
    let page_count = pages.len();

    // Object layout: 1 catalog, 2 page tree, 3 font, then an alternating
    // page/content pair per page starting at 4.
    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();

    let mut objects: Vec<Vec<u8>> = Vec::with_capacity(3 + 2 * page_count);
    objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    objects.push(
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), page_count).into_bytes(),
    );
    objects.push(b"<< /Type /Font /Subtype /Type1 /BaseFont /Courier >>".to_vec());

    for (index, page) in pages.iter().enumerate() {
        let content_id = 5 + 2 * index;
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT, content_id
            )
            .into_bytes(),
        );
        objects.push(stream_object(&page_stream(page)));
    }

    serialize(&objects)
}

/// Write the PDF artifact.
pub fn write_pdf_report(report: &StructuredReport, path: &Path) -> std::io::Result<()> {
    fs::write(path, render_pdf(report))
}

/// Content stream drawing one page of lines from the top margin down.
fn page_stream(lines: &[String]) -> Vec<u8> {
    let mut content = String::new();
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {} Tf\n", FONT_SIZE));
    content.push_str(&format!("{} TL\n", LEADING));
    content.push_str(&format!("{} {} Td\n", MARGIN, PAGE_HEIGHT - MARGIN));
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            content.push_str("T*\n");
        }
        content.push('(');
        content.push_str(&escape_text(line));
        content.push_str(") Tj\n");
    }
    content.push_str("ET");
    content.into_bytes()
}

fn stream_object(stream: &[u8]) -> Vec<u8> {
    let mut body = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
    body.extend_from_slice(stream);
    body.extend_from_slice(b"\nendstream");
    body
}

/// Backslash, parenthesis open and close are the string delimiters of the
/// PDF text operators and must be escaped.
fn escape_text(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Assemble header, numbered objects, cross-reference table and trailer.
/// Offsets in the xref are byte positions, so this is the only place that
/// writes to the final buffer.
fn serialize(objects: &[Vec<u8>]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    buf.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(buf.len());
        buf.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
        buf.extend_from_slice(body);
        buf.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportOptions, build_report};
    use crate::types::{AggregateResult, PanelConfig, ReconciledRecord};

    fn panel() -> PanelConfig {
        PanelConfig {
            power_watts: 400.0,
            efficiency_percent: 18.0,
            panel_count: 10,
            panel_area_m2: 1.6,
        }
    }

    fn report_with_periods(count: usize) -> StructuredReport {
        let records: Vec<ReconciledRecord> = (0..count)
            .map(|i| ReconciledRecord {
                period: format!("P{:02}", i + 1),
                irradiance: 100.0,
                expected: 288.0,
                actual: 250.0,
                efficiency_percent: 250.0 / 288.0 * 100.0,
            })
            .collect();
        let aggregate = AggregateResult {
            total_expected: 288.0 * count as f64,
            total_actual: 250.0 * count as f64,
            overall_efficiency_percent: 250.0 / 288.0 * 100.0,
        };
        build_report(&records, &aggregate, &panel(), &[], ReportOptions::default())
    }

    #[test]
    fn test_lines_per_page_at_a4_geometry() {
        assert_eq!(lines_per_page(), 61);
    }

    #[test]
    fn test_single_page_document_shape() {
        let bytes = render_pdf(&report_with_periods(2));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/Kids [4 0 R]"));
        assert!(text.contains("(Solar Plant Efficiency Report) Tj"));
    }

    #[test]
    fn test_page_breaks_when_the_page_fills() {
        // 11 fixed lines plus one per record: 60 records -> 71 lines -> 2 pages.
        let report = report_with_periods(60);
        assert_eq!(report.lines().len(), 71);

        let bytes = render_pdf(&report);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/Kids [4 0 R 6 0 R]"));
    }

    #[test]
    fn test_pdf_carries_the_same_digits_as_the_text_lines() {
        let report = report_with_periods(2);
        let bytes = render_pdf(&report);
        let text = String::from_utf8_lossy(&bytes);
        for line in report.lines() {
            if !line.is_empty() {
                assert!(text.contains(&format!("({}) Tj", line)), "missing line: {}", line);
            }
        }
    }

    #[test]
    fn test_escape_text_handles_string_delimiters() {
        assert_eq!(escape_text(r"a(b)c\d"), r"a\(b\)c\\d");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = render_pdf(&report_with_periods(1));
        let text = String::from_utf8_lossy(&bytes);
        let xref_at = text.find("xref\n").expect("xref table");
        // Skip "xref", the subsection header, and the free entry.
        let entries: Vec<&str> =
            text[xref_at..].lines().skip(3).take_while(|l| l.ends_with(" n ")).collect();
        assert_eq!(entries.len(), 5);
        for entry in entries {
            let offset: usize = entry[..10].parse().expect("offset digits");
            assert!(text[offset..].starts_with(char::is_numeric));
        }
    }
}
