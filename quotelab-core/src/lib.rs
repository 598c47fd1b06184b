//! QuoteLab Core — table loaders, chart renderers, and report orchestration
//! for the market microstructure study.
//!
//! The upstream quote/trade analytics pipeline writes one summary CSV per
//! analysis (spread statistics, market-maker share, exchange breakdown,
//! price impact, inventory pressure, intraday profiles). This crate turns
//! each table into a static PNG chart:
//! - Typed CSV records and loaders (`tables`)
//! - One renderer per chart (`charts`)
//! - Shared palette and font tokens (`theme`)
//! - Sequential six-stage orchestration with progress reporting (`report`)

pub mod charts;
pub mod config;
pub mod report;
pub mod tables;
pub mod theme;

pub use config::{ConfigError, IntradayConfig, ReportConfig};
pub use report::{ChartPaths, RenderProgress, ReportBuilder, StdoutProgress};
pub use tables::TableError;
