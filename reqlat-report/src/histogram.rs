use std::collections::BTreeMap;
use std::fmt;

use reqlat_common::Method;
use serde::{Deserialize, Serialize};

use crate::config::{BUCKET_COUNT, BUCKET_WIDTH_MS};

/// Fixed-width latency histogram. Only non-zero buckets are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub method: Method,
    pub bucket_width_ms: i64,
    /// Bucket index → count. Bucket `i` covers `[i * width, (i + 1) * width)`.
    pub buckets: BTreeMap<usize, u64>,
    /// Values at or above `bucket_width_ms * BUCKET_COUNT`.
    pub overflow: u64,
}

impl Histogram {
    /// Bucket `values`. Negative values are counted in bucket 0.
    pub fn from_samples(method: Method, values: &[i64]) -> Self {
        let limit = BUCKET_WIDTH_MS * BUCKET_COUNT as i64;
        let mut buckets = BTreeMap::new();
        let mut overflow = 0;

        for &v in values {
            if v >= limit {
                overflow += 1;
            } else {
                let idx = (v.max(0) / BUCKET_WIDTH_MS) as usize;
                *buckets.entry(idx).or_insert(0) += 1;
            }
        }

        Histogram { method, bucket_width_ms: BUCKET_WIDTH_MS, buckets, overflow }
    }

    pub fn total(&self) -> u64 {
        self.buckets.values().sum::<u64>() + self.overflow
    }
}

/// Non-zero buckets as `(<bucket>) - <count>` lines.
impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Operation Histogram: {}", self.method)?;
        for (idx, count) in &self.buckets {
            writeln!(f, "({idx}) - {count}")?;
        }
        if self.overflow != 0 {
            writeln!(f, "(>={BUCKET_COUNT}) - {}", self.overflow)?;
        }
        writeln!(f, "---")
    }
}

pub fn render_histogram(histogram: &Histogram) -> String {
    histogram.to_string()
}
