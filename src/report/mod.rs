//! Report generation module - projection of pipeline results into artifacts.
//!
//! This module handles:
//! - Building the `StructuredReport` rendering model from reconciled
//!   records, the aggregate, the panel config, and header metadata
//! - The canonical line sequence every renderer reproduces digit for digit
//! - Plain-text rendering (console echo and `.txt` artifact)
//! - Paginated PDF rendering onto fixed A4 pages
//! - SVG chart rendering (paired bars, efficiency-scaled color)
//! - JSON export of the reconciled result set
//!
//! No computation happens here; renderers are pure projections from the
//! same `StructuredReport`, so text and PDF output carry identical digits.
//!
//! # Module Organization
//!
//! - `types` - `StructuredReport`, `ReportOptions`, and the line layout
//! - `text` - newline-delimited text rendering
//! - `pdf` - fixed-page PDF rendering
//! - `chart` - SVG generation chart
//! - `export` - JSON export

mod chart;
mod export;
mod pdf;
mod text;
mod types;

// Re-export the rendering model
pub use types::{ReportOptions, StructuredReport, build_report};

// Re-export renderers
pub use chart::{efficiency_color, write_chart};
pub use export::export_json_report;
pub use pdf::write_pdf_report;
pub use text::{render_text, write_text_report};
