//! Coverage tree
//!
//! Groups parsed records by the directories of their file paths. A record
//! for `a/b/c.go` is attached to the node for `a/b`; the file name itself is
//! never a tree level. Records without a directory (bare file names and the
//! `total` record) stay on the root.

use std::collections::BTreeMap;

use crate::coverage::{CoverageEntry, CoverageTier, Thresholds};

/// A directory in the coverage tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageNode {
    /// Child directories keyed by a single path segment, kept sorted
    children: BTreeMap<String, CoverageNode>,
    /// Records whose containing directory is this node, in input order
    entries: Vec<CoverageEntry>,
}

impl CoverageNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from records in input order
    pub fn from_entries(entries: impl IntoIterator<Item = CoverageEntry>) -> Self {
        let mut root = Self::new();
        for entry in entries {
            root.insert(entry);
        }
        root
    }

    /// Find or create a child directory node
    pub fn get_or_create_child(&mut self, name: &str) -> &mut CoverageNode {
        self.children.entry(name.to_string()).or_default()
    }

    /// Add a record under its containing directory, creating missing levels
    pub fn insert(&mut self, entry: CoverageEntry) {
        let mut parts: Vec<&str> = entry.path().split('/').collect();
        parts.pop();

        let mut current = self;
        for part in parts {
            current = current.get_or_create_child(part);
        }
        current.entries.push(entry);
    }

    pub fn child(&self, name: &str) -> Option<&CoverageNode> {
        self.children.get(name)
    }

    /// Child directories in lexicographic order
    pub fn children(&self) -> impl Iterator<Item = (&str, &CoverageNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn entries(&self) -> &[CoverageEntry] {
        &self.entries
    }

    /// Exactly one child and no records of its own
    pub fn is_pass_through(&self) -> bool {
        self.children.len() == 1 && self.entries.is_empty()
    }

    /// The only child of a pass-through node
    pub fn single_child(&self) -> Option<(&str, &CoverageNode)> {
        if self.is_pass_through() {
            self.children().next()
        } else {
            None
        }
    }

    /// Number of records in this subtree
    pub fn entry_count(&self) -> usize {
        self.entries.len()
            + self
                .children
                .values()
                .map(CoverageNode::entry_count)
                .sum::<usize>()
    }

    /// All records in this subtree, depth-first in render order
    pub fn all_entries(&self) -> Vec<&CoverageEntry> {
        let mut entries = Vec::new();
        self.collect_entries(&mut entries);
        entries
    }

    fn collect_entries<'a>(&'a self, entries: &mut Vec<&'a CoverageEntry>) {
        for child in self.children.values() {
            child.collect_entries(entries);
        }
        entries.extend(self.entries.iter());
    }
}

/// Tier counts for a coverage tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageStats {
    /// Function records, excluding `total`
    pub functions: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    /// Percent of the `total` record, if present
    pub total_percent: Option<f64>,
}

impl CoverageStats {
    pub fn from_tree(tree: &CoverageNode, thresholds: &Thresholds) -> Self {
        let mut stats = Self::default();

        for entry in tree.all_entries() {
            if entry.is_total() {
                stats.total_percent = Some(entry.percent_value());
                continue;
            }

            stats.functions += 1;
            match entry.tier(thresholds) {
                CoverageTier::Green => stats.green += 1,
                CoverageTier::Yellow => stats.yellow += 1,
                CoverageTier::Red => stats.red += 1,
            }
        }

        stats
    }

    pub fn count(&self, tier: CoverageTier) -> usize {
        match tier {
            CoverageTier::Green => self.green,
            CoverageTier::Yellow => self.yellow,
            CoverageTier::Red => self.red,
        }
    }

    /// Share of functions in a tier, as a percentage
    pub fn share(&self, tier: CoverageTier) -> f64 {
        if self.functions == 0 {
            0.0
        } else {
            (self.count(tier) as f64) / (self.functions as f64) * 100.0
        }
    }
}
