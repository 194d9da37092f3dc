//! Per-method latency statistics over a classified request log.

use std::path::Path;

use reqlat_common::Result;
use reqlat_parser::{parse_file, ClassifyMode};

pub mod config;
pub mod histogram;
pub mod report;
pub mod stats;

pub use histogram::Histogram;
pub use report::{format_value, render_json, render_text, Report};
pub use stats::{mean, percentile, SeriesSummary};

/// Read `path` and build its report. Nothing is computed unless every line
/// classifies cleanly.
pub fn report_file(path: &Path, mode: ClassifyMode, histograms: bool) -> Result<Report> {
    let samples = parse_file(path, mode)?;
    let report = Report::build(&samples)?;
    Ok(if histograms { report.with_histograms(&samples) } else { report })
}
