use std::fmt;

use reqlat_common::{Method, ReqLatError, Result};
use reqlat_parser::Samples;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::histogram::Histogram;
use crate::stats::SeriesSummary;

/// Per-method statistics for one log file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub post: SeriesSummary,
    pub get: SeriesSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub histograms: Vec<Histogram>,
}

impl Report {
    /// Summarize both series. Every empty series is named in a single
    /// [`ReqLatError::EmptySeries`], POST before GET.
    pub fn build(samples: &Samples) -> Result<Self> {
        let empty: Vec<Method> = [Method::Post, Method::Get]
            .into_iter()
            .filter(|&m| samples.series(m).is_empty())
            .collect();
        if !empty.is_empty() {
            return Err(ReqLatError::EmptySeries(empty));
        }

        let report = Report {
            post: SeriesSummary::from_samples(Method::Post, &samples.posts)?,
            get: SeriesSummary::from_samples(Method::Get, &samples.gets)?,
            histograms: Vec::new(),
        };
        debug!(posts = report.post.count, gets = report.get.count, "built report");
        Ok(report)
    }

    /// Attach POST and GET latency histograms built from `samples`.
    pub fn with_histograms(mut self, samples: &Samples) -> Self {
        self.histograms = [Method::Post, Method::Get]
            .into_iter()
            .map(|m| Histogram::from_samples(m, samples.series(m)))
            .collect();
        self
    }

    /// The six reported statistics, labeled, in output order.
    pub fn lines(&self) -> [(&'static str, f64); 6] {
        [
            ("POST Mean", self.post.mean),
            ("GET Mean", self.get.mean),
            ("POST 90th Percentile", self.post.p90),
            ("POST 99th Percentile", self.post.p99),
            ("GET 90th Percentile", self.get.p90),
            ("GET 99th Percentile", self.get.p99),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {}", format_value(value))?;
        }
        for histogram in &self.histograms {
            write!(f, "{histogram}")?;
        }
        Ok(())
    }
}

/// Human-readable report: one `<label>: <value>` line per statistic, then any histograms.
pub fn render_text(report: &Report) -> String {
    report.to_string()
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Shortest round-trip form, keeping one decimal on integral values (`150.0`).
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
