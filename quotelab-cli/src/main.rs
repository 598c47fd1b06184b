//! QuoteLab CLI — render the microstructure study charts.
//!
//! With no arguments this reproduces the stock report: read the analysis
//! CSVs from `output/` and write one PNG per chart into `plots/`. Flags
//! override the directories and the intraday symbol selection; `--config`
//! loads everything from a TOML file instead.

use anyhow::{bail, Result};
use clap::Parser;
use quotelab_core::{ReportBuilder, ReportConfig, StdoutProgress};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quotelab",
    about = "QuoteLab — chart generator for the market microstructure study"
)]
struct Cli {
    /// Path to a TOML config file (mutually exclusive with the other flags).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing the analysis CSV outputs.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory to write the chart PNGs into.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Symbols for the intraday profile panels (e.g. AAPL MSFT NVDA).
    #[arg(long, num_args = 1..)]
    symbols: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides_given =
        cli.input_dir.is_some() || cli.output_dir.is_some() || !cli.symbols.is_empty();
    if cli.config.is_some() && overrides_given {
        bail!("--config is mutually exclusive with --input-dir, --output-dir, and --symbols");
    }

    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };
    if let Some(dir) = cli.input_dir {
        config.input_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if !cli.symbols.is_empty() {
        config.intraday.symbols = cli.symbols;
    }

    let builder = ReportBuilder::new(config)?;
    builder.render_all(&StdoutProgress)?;

    Ok(())
}
