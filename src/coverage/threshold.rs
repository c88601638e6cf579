//! Coverage threshold validation

use colored::Colorize;

use crate::tree::CoverageStats;

/// Result of checking total coverage against a minimum
#[derive(Debug, Clone)]
pub struct ThresholdResult {
    pub passed: bool,
    /// Percent from the `total` record, if the report had one
    pub actual: Option<f64>,
    pub threshold: f64,
    pub delta: Option<f64>,
}

impl ThresholdResult {
    pub fn print_summary(&self) {
        match self.actual {
            Some(coverage) => {
                let delta = coverage - self.threshold;
                let status = if self.passed { "✓".green() } else { "✗".red() };
                let delta_str = if delta >= 0.0 {
                    format!("+{:.1}%", delta).green()
                } else {
                    format!("{:.1}%", delta).red()
                };

                eprintln!(
                    "  {} Total coverage: {:.1}% (threshold: {:.1}%, {})",
                    status, coverage, self.threshold, delta_str
                );
            }
            None => {
                eprintln!(
                    "  {} No total record, threshold {:.1}% not checked",
                    "!".yellow(),
                    self.threshold
                );
            }
        }
    }
}

/// Validate total coverage against `--fail-under`
///
/// A report without a `total` record passes; there is nothing to compare.
pub fn check_fail_under(stats: &CoverageStats, threshold: f64) -> ThresholdResult {
    let actual = stats.total_percent;

    if actual.is_none() {
        log::warn!("report has no total record; skipping fail-under check");
    }

    ThresholdResult {
        passed: actual.map(|cov| cov >= threshold).unwrap_or(true),
        actual,
        threshold,
        delta: actual.map(|cov| cov - threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_validation() {
        let stats = CoverageStats {
            total_percent: Some(75.0),
            ..Default::default()
        };

        // Passing case
        let result = check_fail_under(&stats, 70.0);
        assert!(result.passed);
        assert_eq!(result.delta, Some(5.0));

        // Exactly at the threshold passes
        assert!(check_fail_under(&stats, 75.0).passed);

        // Failing case
        let result = check_fail_under(&stats, 80.0);
        assert!(!result.passed);
        assert_eq!(result.delta, Some(-5.0));
    }

    #[test]
    fn test_missing_total_passes() {
        let stats = CoverageStats::default();
        let result = check_fail_under(&stats, 90.0);

        assert!(result.passed);
        assert_eq!(result.actual, None);
        assert_eq!(result.delta, None);
    }
}
