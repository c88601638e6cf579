//! Traffic-light coverage tiers

/// Coverage tier shown next to each function in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageTier {
    /// Above the green threshold
    Green,
    /// Between the yellow and green thresholds, both inclusive
    Yellow,
    /// Below the yellow threshold
    Red,
}

impl CoverageTier {
    pub fn symbol(&self) -> &'static str {
        match self {
            CoverageTier::Green => "🟢",
            CoverageTier::Yellow => "🟡",
            CoverageTier::Red => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoverageTier::Green => "Good",
            CoverageTier::Yellow => "Fair",
            CoverageTier::Red => "Poor",
        }
    }

    pub fn all() -> [CoverageTier; 3] {
        [CoverageTier::Green, CoverageTier::Yellow, CoverageTier::Red]
    }
}

/// Percent boundaries between tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Strictly above this is green
    pub green_above: f64,
    /// At or above this (and not green) is yellow
    pub yellow_from: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            green_above: 75.0,
            yellow_from: 50.0,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, percent: f64) -> CoverageTier {
        if percent > self.green_above {
            CoverageTier::Green
        } else if percent >= self.yellow_from {
            CoverageTier::Yellow
        } else {
            CoverageTier::Red
        }
    }

    /// Check that both bounds are percentages and ordered
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("green_above", self.green_above), ("yellow_from", self.yellow_from)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{} must be between 0 and 100, got {}", name, value));
            }
        }
        if self.yellow_from > self.green_above {
            return Err(format!(
                "yellow_from ({}) must not exceed green_above ({})",
                self.yellow_from, self.green_above
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let t = Thresholds::default();

        assert_eq!(t.classify(100.0), CoverageTier::Green);
        assert_eq!(t.classify(75.1), CoverageTier::Green);
        assert_eq!(t.classify(75.0), CoverageTier::Yellow);
        assert_eq!(t.classify(50.0), CoverageTier::Yellow);
        assert_eq!(t.classify(49.9), CoverageTier::Red);
        assert_eq!(t.classify(0.0), CoverageTier::Red);
    }

    #[test]
    fn test_exactly_one_tier_per_percent() {
        let t = Thresholds::default();
        for tenth in 0..=1000 {
            let p = tenth as f64 / 10.0;
            let expected = if p > 75.0 {
                CoverageTier::Green
            } else if p >= 50.0 {
                CoverageTier::Yellow
            } else {
                CoverageTier::Red
            };
            assert_eq!(t.classify(p), expected, "percent {}", p);
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(CoverageTier::Green.symbol(), "🟢");
        assert_eq!(CoverageTier::Yellow.symbol(), "🟡");
        assert_eq!(CoverageTier::Red.symbol(), "🔴");
    }

    #[test]
    fn test_validate() {
        assert!(Thresholds::default().validate().is_ok());

        let inverted = Thresholds {
            green_above: 40.0,
            yellow_from: 60.0,
        };
        assert!(inverted.validate().is_err());

        let out_of_range = Thresholds {
            green_above: 120.0,
            yellow_from: 50.0,
        };
        assert!(out_of_range.validate().is_err());
    }
}
