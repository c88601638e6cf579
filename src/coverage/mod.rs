//! Coverage module
//!
//! Provides:
//! - `go tool cover -func` record parsing
//! - Traffic-light tiers
//! - Threshold validation

mod entry;
mod threshold;
mod tier;

pub use entry::*;
pub use threshold::*;
pub use tier::*;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{ReportError, Result};

/// Path argument that selects stdin
pub const STDIN_PATH: &str = "-";

/// Read and parse a coverage file, or stdin when the path is `-`
pub fn read_report(path: &Path) -> Result<Vec<CoverageEntry>> {
    let unavailable = |source: io::Error| match source.kind() {
        io::ErrorKind::InvalidData => ReportError::InvalidEncoding {
            path: path.to_path_buf(),
            source,
        },
        _ => ReportError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        },
    };

    let content = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(unavailable)?;
        buf
    } else {
        fs::read_to_string(path).map_err(unavailable)?
    };

    parse_report(&content)
}

/// Parse report content, skipping blank lines and stopping at the first bad record
pub fn parse_report(content: &str) -> Result<Vec<CoverageEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let entry = CoverageEntry::parse(line).map_err(|e| e.at_line(idx + 1))?;
        entries.push(entry);
    }

    log::debug!("parsed {} coverage records", entries.len());
    Ok(entries)
}
