//! Per-function coverage records
//!
//! Each record is one line of `go tool cover -func` output:
//!
//! ```text
//! github.com/acme/app/server/http.go:42:	Serve		87.5%
//! total:							(statements)	71.3%
//! ```

use crate::error::{ReportError, Result};

use super::{CoverageTier, Thresholds};

/// Path token of the aggregate record
pub const TOTAL: &str = "total";

/// One parsed coverage record
///
/// Only built through [`CoverageEntry::parse`], so `percent` always holds a
/// number in 0-100 followed by `%`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageEntry {
    path: String,
    line: String,
    function: String,
    percent: String,
}

impl CoverageEntry {
    /// Parse a single non-empty record line
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(':').collect();

        let (path, line_no, measurement) = match fields.as_slice() {
            [TOTAL, measurement] => (TOTAL, "", *measurement),
            [TOTAL, ..] => {
                return Err(ReportError::malformed(
                    line,
                    format!("expected `total:<measurement>`, found {} fields", fields.len()),
                ))
            }
            [path, line_no, measurement] => (*path, *line_no, *measurement),
            _ => {
                return Err(ReportError::malformed(
                    line,
                    format!("expected 3 colon-separated fields, found {}", fields.len()),
                ))
            }
        };

        if path.is_empty() {
            return Err(ReportError::malformed(line, "empty file path"));
        }

        let (function, percent) = split_measurement(measurement)
            .ok_or_else(|| ReportError::malformed(line, "expected `<function>\\t<percent>`"))?;

        if function.is_empty() {
            return Err(ReportError::malformed(line, "empty function name"));
        }
        validate_percent(&percent).map_err(|reason| ReportError::malformed(line, reason))?;

        Ok(Self {
            path: path.to_string(),
            line: line_no.to_string(),
            function,
            percent,
        })
    }

    /// Source file path, or `total` for the aggregate record
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Line number token, empty for the aggregate record
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Percentage text including the trailing `%`
    pub fn percent(&self) -> &str {
        &self.percent
    }

    pub fn is_total(&self) -> bool {
        self.path == TOTAL
    }

    /// Last path segment (`http.go` for `server/http.go`)
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// `file:line`; the colon stays even when the line token is empty
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_name(), self.line)
    }

    /// Numeric percent with the trailing `%` stripped
    ///
    /// `parse` has already validated the text, so the fallback never applies.
    pub fn percent_value(&self) -> f64 {
        let mut chars = self.percent.chars();
        chars.next_back();
        chars.as_str().parse().unwrap_or(0.0)
    }

    pub fn tier(&self, thresholds: &Thresholds) -> CoverageTier {
        thresholds.classify(self.percent_value())
    }
}

/// Split `fn\t\t87.5%` into its two tokens. Tab runs count as one separator.
fn split_measurement(measurement: &str) -> Option<(String, String)> {
    let normalized = measurement
        .split('\t')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let tokens: Vec<&str> = normalized.trim_matches(' ').split(' ').collect();
    match tokens.as_slice() {
        [function, percent] => Some((function.to_string(), percent.to_string())),
        _ => None,
    }
}

fn validate_percent(percent: &str) -> std::result::Result<(), String> {
    let Some(number) = percent.strip_suffix('%') else {
        return Err(format!("percent `{}` has no trailing %", percent));
    };
    let value: f64 = number
        .parse()
        .map_err(|_| format!("percent `{}` is not a number", percent))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("percent `{}` is outside 0-100", percent));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_function_line() {
        let entry = CoverageEntry::parse("github.com/acme/app/server/http.go:42:\tServe\t\t87.5%").unwrap();

        assert_eq!(entry.path, "github.com/acme/app/server/http.go");
        assert_eq!(entry.line, "42");
        assert_eq!(entry.function, "Serve");
        assert_eq!(entry.percent, "87.5%");
        assert!(!entry.is_total());
    }

    #[test]
    fn test_tab_count_does_not_matter() {
        for tabs in 1..6 {
            let sep = "\t".repeat(tabs);
            let line = format!("pkg/a.go:7:{sep}Handle{sep}12.0%");
            let entry = CoverageEntry::parse(&line).unwrap();
            assert_eq!(entry.function, "Handle");
            assert_eq!(entry.percent, "12.0%");
        }
    }

    #[test]
    fn test_parse_total() {
        let entry = CoverageEntry::parse("total:\t\t\t(statements)\t71.3%").unwrap();

        assert!(entry.is_total());
        assert_eq!(entry.path, "total");
        assert_eq!(entry.line, "");
        assert_eq!(entry.function, "(statements)");
        assert_eq!(entry.percent, "71.3%");
        assert_eq!(entry.location(), "total:");
    }

    #[test]
    fn test_location_and_value() {
        let entry = CoverageEntry::parse("a/b/c.go:10:\tbar\t40.0%").unwrap();

        assert_eq!(entry.file_name(), "c.go");
        assert_eq!(entry.location(), "c.go:10");
        assert!((entry.percent_value() - 40.0).abs() < f64::EPSILON);
        assert_eq!(entry.tier(&Thresholds::default()), CoverageTier::Red);
    }

    #[test]
    fn test_bare_file_name() {
        let entry = CoverageEntry::parse("main.go:3:\tmain\t100.0%").unwrap();
        assert_eq!(entry.file_name(), "main.go");
        assert_eq!(entry.tier(&Thresholds::default()), CoverageTier::Green);
    }

    #[test]
    fn test_percent_value_bounds() {
        let zero = CoverageEntry::parse("a.go:1:\tf\t0.0%").unwrap();
        let full = CoverageEntry::parse("a.go:2:\tg\t100%").unwrap();

        assert_eq!(zero.percent_value(), 0.0);
        assert_eq!(full.percent_value(), 100.0);
        assert_eq!(full.percent(), "100%");
        assert_eq!(full.path(), "a.go");
        assert_eq!(full.line(), "2");
        assert_eq!(full.function(), "g");
    }

    #[test]
    fn test_malformed_lines() {
        let cases = [
            "no colons here",
            "pkg/a.go:10",
            "pkg/a.go:10:\tonlyfunction",
            "pkg/a.go:10:\tfn\textra\t50%",
            "pkg/a.go:10:\tfn\t50",
            "pkg/a.go:10:\tfn\tabc%",
            "pkg/a.go:10:\tfn\t150.0%",
            ":10:\tfn\t50.0%",
            "total:1:\tfn\t50.0%",
        ];

        for case in cases {
            let err = CoverageEntry::parse(case).unwrap_err();
            assert!(
                matches!(err, ReportError::MalformedRecord { .. }),
                "expected malformed record for {:?}",
                case
            );
        }
    }

    #[test]
    fn test_malformed_reason_is_reported() {
        let err = CoverageEntry::parse("pkg/a.go:10:\tfn\tabc%").unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }
}
