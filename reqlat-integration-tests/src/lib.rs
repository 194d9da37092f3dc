use std::io::Write;
use tempfile::NamedTempFile;

/// Write `lines` to a fresh temp file, one per line. The file is deleted when
/// the returned handle drops.
pub fn write_log<S: AsRef<str>>(lines: &[S]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{}", line.as_ref())?;
    }
    file.flush()?;
    Ok(file)
}

/// Deterministic server-style log: `count` lines alternating GET/POST with
/// latencies spread over `0..span_ms`.
pub fn synthetic_log(count: usize, span_ms: i64) -> Vec<String> {
    (0..count)
        .map(|i| {
            let method = if i % 2 == 0 { "GET" } else { "POST" };
            let latency = (i as i64 * 7919) % span_ms;
            format!("{method} {latency}")
        })
        .collect()
}
