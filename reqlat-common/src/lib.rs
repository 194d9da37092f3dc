use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const EXIT_IO: i32 = 3;
pub const EXIT_PARSE: i32 = 4;
pub const EXIT_MALFORMED: i32 = 5;
pub const EXIT_EMPTY_SERIES: i32 = 6;

/// Request method a log line is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Exact, case-sensitive match against a tag token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for reqlat operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReqLatError {
    #[error("Cannot read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Line {line_no}: cannot parse latency from {line:?}")]
    Parse { line_no: usize, line: String },

    #[error("Line {line_no}: malformed record {line:?}")]
    MalformedRecord { line_no: usize, line: String },

    #[error("No observations recorded for {}", join_methods(.0))]
    EmptySeries(Vec<Method>),
}

impl ReqLatError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReqLatError::Io { .. } => EXIT_IO,
            ReqLatError::Parse { .. } => EXIT_PARSE,
            ReqLatError::MalformedRecord { .. } => EXIT_MALFORMED,
            ReqLatError::EmptySeries(_) => EXIT_EMPTY_SERIES,
        }
    }
}

fn join_methods(methods: &[Method]) -> String {
    methods.iter().map(Method::as_str).collect::<Vec<_>>().join(", ")
}

/// Result type for reqlat operations
pub type Result<T> = std::result::Result<T, ReqLatError>;
