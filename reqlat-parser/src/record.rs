use reqlat_common::{Method, ReqLatError, Result};

/// How strictly a line's tag token is checked before its payload is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyMode {
    /// Any line starting with `GET` is a GET record; every other line is a POST record.
    #[default]
    Permissive,
    /// The tag must be exactly `GET` or `POST` followed by a single numeric field.
    Strict,
}

/// One classified log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Get(i64),
    Post(i64),
}

impl Record {
    pub fn method(&self) -> Method {
        match self {
            Record::Get(_) => Method::Get,
            Record::Post(_) => Method::Post,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Record::Get(v) | Record::Post(v) => *v,
        }
    }

    fn new(method: Method, value: i64) -> Self {
        match method {
            Method::Get => Record::Get(value),
            Method::Post => Record::Post(value),
        }
    }
}

/// Split `line` at its first run of whitespace into `(tag, payload)`.
/// The payload keeps its surrounding whitespace; a line with no whitespace
/// has an empty payload.
pub fn split_tag(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(idx) => line.split_at(idx),
        None => (line, ""),
    }
}

/// Classify a single line (without its line terminator). `line_no` is 1-based
/// and only used to label errors.
pub fn classify_line(line: &str, line_no: usize, mode: ClassifyMode) -> Result<Record> {
    let (tag, payload) = split_tag(line);

    let method = match mode {
        ClassifyMode::Permissive => {
            if line.starts_with("GET") {
                Method::Get
            } else {
                Method::Post
            }
        }
        ClassifyMode::Strict => {
            let method = Method::from_token(tag).ok_or_else(|| malformed(line, line_no))?;
            if payload.split_whitespace().count() != 1 {
                return Err(malformed(line, line_no));
            }
            method
        }
    };

    let value = payload
        .trim()
        .parse::<i64>()
        .map_err(|_| ReqLatError::Parse { line_no, line: line.to_string() })?;

    Ok(Record::new(method, value))
}

fn malformed(line: &str, line_no: usize) -> ReqLatError {
    ReqLatError::MalformedRecord { line_no, line: line.to_string() }
}
