//! Serializable report configuration.
//!
//! The defaults reproduce the stock report exactly: read the analysis CSVs
//! from `output/`, write the chart PNGs to `plots/`, and draw the intraday
//! panels for AAPL, MSFT, and NVDA over the first 100 five-minute buckets.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_DIR: &str = "plots";
pub const DEFAULT_INTRADAY_SYMBOLS: [&str; 3] = ["AAPL", "MSFT", "NVDA"];
pub const DEFAULT_INTRADAY_BUCKETS: usize = 100;

/// Configuration for a single report run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory containing the analysis CSV outputs.
    pub input_dir: PathBuf,

    /// Directory the chart PNGs are written into (created if absent).
    pub output_dir: PathBuf,

    /// Intraday profile settings.
    pub intraday: IntradayConfig,
}

/// Symbol selection for the intraday profile figure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntradayConfig {
    /// Symbols to draw, one line per symbol.
    pub symbols: Vec<String>,

    /// Number of leading time buckets to keep per symbol.
    pub buckets: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            intraday: IntradayConfig::default(),
        }
    }
}

impl Default for IntradayConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_INTRADAY_SYMBOLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            buckets: DEFAULT_INTRADAY_BUCKETS,
        }
    }
}

impl ReportConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reproduces_stock_report_paths() {
        let config = ReportConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("output"));
        assert_eq!(config.output_dir, PathBuf::from("plots"));
        assert_eq!(config.intraday.symbols, vec!["AAPL", "MSFT", "NVDA"]);
        assert_eq!(config.intraday.buckets, 100);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = ReportConfig::from_toml(
            r#"
output_dir = "charts"

[intraday]
symbols = ["SPY"]
"#,
        )
        .unwrap();
        assert_eq!(config.input_dir, PathBuf::from("output"));
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!(config.intraday.symbols, vec!["SPY"]);
        assert_eq!(config.intraday.buckets, 100);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(ReportConfig::from_toml("input_dir = [").is_err());
    }
}
