//! Mean and percentile calculations over latency series.
//!
//! Percentiles use linear interpolation between the two closest ranks: for a
//! sorted series of length `n` the `p`th percentile sits at virtual index
//! `(n - 1) * p / 100`. This is the default ("linear") method of numpy's
//! `percentile`, including its two-sided interpolation formula, so results
//! match it bit for bit.

use reqlat_common::{Method, ReqLatError, Result};
use serde::{Deserialize, Serialize};

use crate::config::REPORTED_PERCENTILES;

/// Arithmetic mean of `values`, or `None` for an empty slice.
///
/// The sum is accumulated exactly before the single division.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(mean_of_non_empty(values))
}

fn mean_of_non_empty(values: &[i64]) -> f64 {
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    sum as f64 / values.len() as f64
}

/// `p`th percentile (0.0 to 100.0) of `values`.
///
/// Returns `None` if `values` is empty or `p` is out of range.
///
/// # Examples
///
/// ```
/// use reqlat_report::stats::percentile;
///
/// assert_eq!(percentile(&[5, 1, 4, 2, 3], 50.0), Some(3.0));
/// assert_eq!(percentile(&[1, 2, 3, 4], 50.0), Some(2.5));
/// ```
pub fn percentile(values: &[i64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Some(percentile_of_sorted(&sorted, p))
}

/// Same as [`percentile`] for input that is already sorted ascending and non-empty.
fn percentile_of_sorted(sorted: &[i64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let virtual_index = last as f64 * (p / 100.0);
    let lower = (virtual_index.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let fraction = virtual_index - lower as f64;
    lerp(sorted[lower] as f64, sorted[upper] as f64, fraction)
}

// Interpolate from whichever end is closer, as numpy does.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Summary statistics for one method's latency series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub method: Method,
    pub count: usize,
    pub mean: f64,
    pub p90: f64,
    pub p99: f64,
    pub min: i64,
    pub max: i64,
}

impl SeriesSummary {
    /// Summarize `values`, failing with [`ReqLatError::EmptySeries`] if there are none.
    pub fn from_samples(method: Method, values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ReqLatError::EmptySeries(vec![method]));
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let [p90, p99] = REPORTED_PERCENTILES.map(|p| percentile_of_sorted(&sorted, p));

        Ok(SeriesSummary {
            method,
            count: sorted.len(),
            mean: mean_of_non_empty(&sorted),
            p90,
            p99,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}
