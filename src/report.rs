use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::coverage::{CoverageEntry, CoverageTier, Thresholds, TOTAL};
use crate::tree::{CoverageNode, CoverageStats};

pub const DEFAULT_TITLE: &str = "## Coverage Report:";

/// Options for a rendered report
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// First line of the document
    pub title: String,
    pub thresholds: Thresholds,
    /// Append a table of functions per tier
    pub summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            thresholds: Thresholds::default(),
            summary: false,
        }
    }
}

/// Render the tree and write it to a markdown file
pub fn generate_report(tree: &CoverageNode, options: &ReportOptions, output_path: &Path) -> Result<()> {
    let markdown = render_report(tree, options);
    fs::write(output_path, markdown)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    Ok(())
}

/// Render the whole document: title, directory sections, optional summary
pub fn render_report(tree: &CoverageNode, options: &ReportOptions) -> String {
    let mut out = format!("{}\n", options.title);
    out.push_str(&render_tree(tree, &options.thresholds));

    if options.summary {
        let stats = CoverageStats::from_tree(tree, &options.thresholds);
        out.push_str(&render_summary(&stats, &options.thresholds));
    }

    out
}

/// Render a whole tree from its root
pub fn render_tree(root: &CoverageNode, thresholds: &Thresholds) -> String {
    render_dir(root, None, thresholds)
}

/// Render one labelled directory and everything below it
///
/// Directories with a single child and no records of their own are folded
/// into the child's heading, so `a` → `b` → `c` prints as `a/b/c`.
pub fn render_node(node: &CoverageNode, label: &str, thresholds: &Thresholds) -> String {
    render_dir(node, Some(label), thresholds)
}

/// `None` marks the root, whose folded child starts a heading without a `/`
fn render_dir(node: &CoverageNode, label: Option<&str>, thresholds: &Thresholds) -> String {
    if let Some((key, child)) = node.single_child() {
        let joined = match label {
            Some(label) => format!("{}/{}", label, key),
            None => key.to_string(),
        };
        return render_node(child, &joined, thresholds);
    }

    let label = label.unwrap_or("");
    let mut out = String::new();
    let collapsible = !label.is_empty() && label != TOTAL;
    let nested = !label.is_empty();

    if collapsible {
        out.push_str(&format!("<details><summary>{}</summary>\n", label));
    }

    if node.child_count() > 0 {
        if nested {
            out.push_str("\n<blockquote>\n");
        }
        for (key, child) in node.children() {
            out.push_str(&render_node(child, key, thresholds));
        }
        if nested {
            out.push_str("</blockquote>\n");
        }
    }

    if !node.entries().is_empty() {
        out.push_str(&render_table(node.entries(), thresholds));
    }

    if collapsible {
        out.push_str("</details>\n");
    }

    out
}

fn render_table(entries: &[CoverageEntry], thresholds: &Thresholds) -> String {
    let mut table = String::from("\n| Location | Function | Coverage |\n");
    table.push_str("| -------- | -------- | -------- |\n");

    for entry in entries {
        table.push_str(&format!(
            "| {} | {} {} | {} |\n",
            entry.location(),
            entry.tier(thresholds).symbol(),
            entry.function(),
            entry.percent()
        ));
    }

    table
}

fn render_summary(stats: &CoverageStats, thresholds: &Thresholds) -> String {
    let mut out = String::from("\n### Summary\n\n");

    if let Some(total) = stats.total_percent {
        out.push_str(&format!("Total coverage: **{:.1}%**\n\n", total));
    }

    out.push_str("| Tier | Functions | Share |\n");
    out.push_str("| ---- | --------- | ----- |\n");

    for tier in CoverageTier::all() {
        let range = match tier {
            CoverageTier::Green => format!("> {}%", thresholds.green_above),
            CoverageTier::Yellow => format!("{}-{}%", thresholds.yellow_from, thresholds.green_above),
            CoverageTier::Red => format!("< {}%", thresholds.yellow_from),
        };
        out.push_str(&format!(
            "| {} {} ({}) | {} | {:.1}% |\n",
            tier.symbol(),
            tier.label(),
            range,
            stats.count(tier),
            stats.share(tier)
        ));
    }

    out
}
