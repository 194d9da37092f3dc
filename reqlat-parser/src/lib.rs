use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use reqlat_common::{Method, ReqLatError, Result};
use tracing::debug;

pub mod record;

pub use record::{classify_line, split_tag, ClassifyMode, Record};

/// Label used in I/O errors when the source is not a named file.
const UNNAMED_SOURCE: &str = "<input>";

/// Latency values partitioned by method, each in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Samples {
    pub gets: Vec<i64>,
    pub posts: Vec<i64>,
}

impl Samples {
    pub fn push(&mut self, record: Record) {
        match record {
            Record::Get(v) => self.gets.push(v),
            Record::Post(v) => self.posts.push(v),
        }
    }

    pub fn series(&self, method: Method) -> &[i64] {
        match method {
            Method::Get => &self.gets,
            Method::Post => &self.posts,
        }
    }

    /// Total number of observations across both methods.
    pub fn len(&self) -> usize {
        self.gets.len() + self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify every line of `reader` until it is exhausted. Lines end at `\n`
/// or `\r\n`; a lone `\r` is part of the line.
pub fn parse_reader<R: BufRead>(reader: R, mode: ClassifyMode) -> Result<Samples> {
    parse_lines(reader, mode, UNNAMED_SOURCE)
}

/// Open `path` and classify every line in it. The file is closed before this
/// returns, on success or failure.
pub fn parse_file(path: &Path, mode: ClassifyMode) -> Result<Samples> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| io_error(&source, e))?;
    debug!(path = %source, ?mode, "reading request log");
    parse_lines(BufReader::new(file), mode, &source)
}

fn parse_lines<R: BufRead>(reader: R, mode: ClassifyMode, source: &str) -> Result<Samples> {
    let mut samples = Samples::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| io_error(source, e))?;
        samples.push(classify_line(&line, idx + 1, mode)?);
    }
    debug!(
        source,
        gets = samples.gets.len(),
        posts = samples.posts.len(),
        "classified request log"
    );
    Ok(samples)
}

fn io_error(source: &str, err: std::io::Error) -> ReqLatError {
    ReqLatError::Io { path: source.to_string(), reason: err.to_string() }
}
