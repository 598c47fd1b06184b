//! Typed records and loaders for the analysis CSV outputs.
//!
//! Each analysis table is deserialized into a row type via serde. The
//! upstream pipeline writes camelCase headers; field renames map them onto
//! the Rust names. Tables are assumed well-formed: a missing column or a
//! malformed value surfaces as a [`TableError`] and aborts the run.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Per-symbol spread statistics (`spread_stats.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SpreadStat {
    pub sym: String,
    #[serde(rename = "avgSpreadBps")]
    pub avg_spread_bps: f64,
    #[serde(rename = "quoteCount")]
    pub quote_count: u64,
}

impl SpreadStat {
    /// Quote count on the millions-scale axis.
    pub fn quote_count_millions(&self) -> f64 {
        self.quote_count as f64 / 1e6
    }
}

/// Market-maker quote share (`mm_market_share.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MakerShare {
    pub mmid: String,
    pub pct: f64,
}

/// Per-exchange quote share (`exchange_breakdown.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExchangeShare {
    pub exchange: String,
    pub pct: f64,
}

/// Kyle's lambda price-impact coefficient (`kyle_lambda.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImpactCoefficient {
    pub sym: String,
    #[serde(rename = "kyleLambda")]
    pub kyle_lambda: f64,
}

impl ImpactCoefficient {
    /// Lambda on the display scale (multiplied by 1e5).
    pub fn display_lambda(&self) -> f64 {
        self.kyle_lambda * 1e5
    }
}

/// Market-maker average size imbalance (`mm_inventory_pressure.csv`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InventoryPressure {
    pub mmid: String,
    #[serde(rename = "avgImbalance")]
    pub avg_imbalance: f64,
}

impl InventoryPressure {
    /// Imbalance on the percentage scale (multiplied by 100).
    pub fn imbalance_pct(&self) -> f64 {
        self.avg_imbalance * 100.0
    }
}

/// One time bucket of the intraday profile (`intraday_profile.csv`).
///
/// The file is grouped by symbol; rows within a group are ordered by
/// time bucket, so the bucket index is implicit in row order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IntradayPoint {
    pub sym: String,
    #[serde(rename = "avgSpreadBps")]
    pub avg_spread_bps: f64,
    #[serde(rename = "quoteCount")]
    pub quote_count: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to open table {path}: {source}")]
    Open { path: PathBuf, source: csv::Error },

    #[error("failed to decode row in {path}: {source}")]
    Decode { path: PathBuf, source: csv::Error },
}

/// Load a whole CSV table into typed rows.
pub fn load_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, TableError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row = record.map_err(|source| TableError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_spread_stats(input_dir: &Path) -> Result<Vec<SpreadStat>, TableError> {
    load_table(&input_dir.join("spread_stats.csv"))
}

pub fn load_maker_shares(input_dir: &Path) -> Result<Vec<MakerShare>, TableError> {
    load_table(&input_dir.join("mm_market_share.csv"))
}

pub fn load_exchange_shares(input_dir: &Path) -> Result<Vec<ExchangeShare>, TableError> {
    load_table(&input_dir.join("exchange_breakdown.csv"))
}

pub fn load_impact_coefficients(input_dir: &Path) -> Result<Vec<ImpactCoefficient>, TableError> {
    load_table(&input_dir.join("kyle_lambda.csv"))
}

pub fn load_inventory_pressure(input_dir: &Path) -> Result<Vec<InventoryPressure>, TableError> {
    load_table(&input_dir.join("mm_inventory_pressure.csv"))
}

pub fn load_intraday_profile(input_dir: &Path) -> Result<Vec<IntradayPoint>, TableError> {
    load_table(&input_dir.join("intraday_profile.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode<T: serde::de::DeserializeOwned>(data: &str) -> Vec<T> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        reader
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .unwrap()
    }

    #[test]
    fn spread_rows_decode_camel_case_headers() {
        let rows: Vec<SpreadStat> =
            decode("sym,avgSpreadBps,quoteCount\nAAPL,1.23,5000000\nMSFT,2.50,3000000\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sym, "AAPL");
        assert!((rows[0].avg_spread_bps - 1.23).abs() < 1e-12);
        assert_eq!(rows[1].quote_count, 3_000_000);
    }

    #[test]
    fn quote_count_millions_is_exact() {
        let row = SpreadStat {
            sym: "AAPL".into(),
            avg_spread_bps: 1.23,
            quote_count: 5_000_000,
        };
        assert_eq!(row.quote_count_millions(), 5.0);
    }

    #[test]
    fn lambda_display_scale_is_exact() {
        let row = ImpactCoefficient {
            sym: "NVDA".into(),
            kyle_lambda: 2e-5,
        };
        assert_eq!(row.display_lambda(), 2.0);
    }

    #[test]
    fn imbalance_percentage_scale_is_exact() {
        let row = InventoryPressure {
            mmid: "CDRG".into(),
            avg_imbalance: 0.25,
        };
        assert_eq!(row.imbalance_pct(), 25.0);
    }

    #[test]
    fn missing_column_is_a_decode_error() {
        let data = "sym,avgSpreadBps\nAAPL,1.23\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let result: Result<Vec<SpreadStat>, _> = reader.deserialize().collect();
        assert!(result.is_err());
    }

    #[test]
    fn intraday_rows_keep_file_order() {
        let rows: Vec<IntradayPoint> = decode(
            "sym,avgSpreadBps,quoteCount\nAAPL,2.0,100\nAAPL,1.5,200\nMSFT,3.0,50\n",
        );
        let aapl: Vec<&IntradayPoint> = rows.iter().filter(|r| r.sym == "AAPL").collect();
        assert_eq!(aapl.len(), 2);
        assert!((aapl[0].avg_spread_bps - 2.0).abs() < 1e-12);
        assert!((aapl[1].avg_spread_bps - 1.5).abs() < 1e-12);
    }
}
