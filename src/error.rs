//! Error types for report generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The coverage input could not be opened or read
    #[error("cannot read coverage input {}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The coverage input was readable but is not UTF-8 text
    #[error("coverage input {} is not valid UTF-8", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A coverage line did not match `<path>:<line>:<function>\t<percent>`
    #[error("malformed record on line {line_number}: {reason} (`{line}`)")]
    MalformedRecord {
        /// 1-based line number in the input, 0 when parsed standalone
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl ReportError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        ReportError::MalformedRecord {
            line_number: 0,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach the input line number to a `MalformedRecord`
    pub(crate) fn at_line(self, number: usize) -> Self {
        match self {
            ReportError::MalformedRecord { line, reason, .. } => ReportError::MalformedRecord {
                line_number: number,
                line,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
