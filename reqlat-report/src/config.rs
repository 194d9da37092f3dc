/// Width of one latency histogram bucket (milliseconds).
pub const BUCKET_WIDTH_MS: i64 = 10;

/// Number of histogram buckets; latencies at or above
/// `BUCKET_WIDTH_MS * BUCKET_COUNT` are counted as overflow.
pub const BUCKET_COUNT: usize = 500;

/// Percentiles reported for every method, in output order.
pub const REPORTED_PERCENTILES: [f64; 2] = [90.0, 99.0];

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
