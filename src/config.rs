use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::coverage::Thresholds;
use crate::error::{ReportError, Result};
use crate::report::{ReportOptions, DEFAULT_TITLE};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub thresholds: ThresholdSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    /// Heading line at the top of the document
    #[serde(default = "default_title")]
    pub title: String,
    /// Append a per-tier summary table
    #[serde(default)]
    pub summary: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            summary: false,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdSection {
    /// Strictly above this is green
    #[serde(default = "default_green_above")]
    pub green_above: f64,
    /// At or above this (and not green) is yellow
    #[serde(default = "default_yellow_from")]
    pub yellow_from: f64,
    /// Minimum total coverage; the run fails below it
    #[serde(default)]
    pub fail_under: Option<f64>,
}

impl Default for ThresholdSection {
    fn default() -> Self {
        Self {
            green_above: default_green_above(),
            yellow_from: default_yellow_from(),
            fail_under: None,
        }
    }
}

impl ThresholdSection {
    pub fn tiers(&self) -> Thresholds {
        Thresholds {
            green_above: self.green_above,
            yellow_from: self.yellow_from,
        }
    }
}

fn default_green_above() -> f64 {
    Thresholds::default().green_above
}

fn default_yellow_from() -> f64 {
    Thresholds::default().yellow_from
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|reason| ReportError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        self.thresholds.tiers().validate()?;

        if let Some(min) = self.thresholds.fail_under {
            if !(0.0..=100.0).contains(&min) {
                return Err(format!("fail_under must be between 0 and 100, got {}", min));
            }
        }

        Ok(())
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report.title.clone(),
            thresholds: self.thresholds.tiers(),
            summary: self.report.summary,
        }
    }
}
