//! covtree - Go coverage as a collapsible markdown tree
//!
//! Turns `go tool cover -func` output into GitHub-flavored markdown:
//! - Records parsed into `path`, `line`, `function`, `percent`
//! - Grouped by directory, with single-child chains folded into one heading
//! - Nested `<details>` sections with a traffic-light marker per function

pub mod config;
pub mod coverage;
pub mod error;
pub mod report;
pub mod tree;

pub use coverage::{parse_report, read_report, CoverageEntry, CoverageTier, Thresholds};
pub use error::ReportError;
pub use report::{render_node, render_report, render_tree, ReportOptions};
pub use tree::{CoverageNode, CoverageStats};
