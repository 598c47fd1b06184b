//! Report orchestration: run the six chart stages in presentation order.
//!
//! Stages are independent; the order below is presentation order only. The
//! first failing stage aborts the run, so charts already written stay on
//! disk and later stages never run. Reruns overwrite the same paths.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::charts;
use crate::config::ReportConfig;
use crate::tables;

/// Progress callback for the chart stages.
pub trait RenderProgress {
    /// Called when a stage starts rendering.
    fn on_stage_start(&self, name: &str, index: usize, total: usize);

    /// Called when a stage's chart has been written.
    fn on_stage_saved(&self, name: &str, path: &Path);

    /// Called when the whole report is done.
    fn on_report_complete(&self, total: usize, output_dir: &Path);
}

/// Simple progress reporter that prints to stdout.
pub struct StdoutProgress;

impl RenderProgress for StdoutProgress {
    fn on_stage_start(&self, name: &str, index: usize, total: usize) {
        println!("[{}/{}] Generating {name} plot...", index + 1, total);
    }

    fn on_stage_saved(&self, _name: &str, path: &Path) {
        println!("  Saved: {}", path.display());
    }

    fn on_report_complete(&self, total: usize, output_dir: &Path) {
        println!();
        println!(
            "All {total} plots generated. Plots saved in: {}",
            output_dir.display()
        );
    }
}

/// Output paths of the six charts, fixed filenames under the output directory.
#[derive(Debug, Clone)]
pub struct ChartPaths {
    pub spread_analysis: PathBuf,
    pub mm_market_share: PathBuf,
    pub exchange_breakdown: PathBuf,
    pub kyle_lambda: PathBuf,
    pub inventory_pressure: PathBuf,
    pub intraday_profile: PathBuf,
}

/// Renders the full chart set for one report run.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// Create a builder, creating the output directory up front (idempotent).
    pub fn new(config: ReportConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "failed to create plot output directory {}",
                config.output_dir.display()
            )
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run all six stages sequentially. Each stage loads its table, renders
    /// its chart, and reports progress before the next begins.
    pub fn render_all(&self, progress: &dyn RenderProgress) -> Result<ChartPaths> {
        const TOTAL: usize = 6;
        let input = &self.config.input_dir;
        let out = &self.config.output_dir;

        progress.on_stage_start("spread statistics", 0, TOTAL);
        let spread_analysis = out.join(charts::SPREAD_FILE);
        charts::spread::render(&tables::load_spread_stats(input)?, &spread_analysis)?;
        progress.on_stage_saved("spread statistics", &spread_analysis);

        progress.on_stage_start("market maker share", 1, TOTAL);
        let mm_market_share = out.join(charts::MARKET_SHARE_FILE);
        charts::market_share::render(&tables::load_maker_shares(input)?, &mm_market_share)?;
        progress.on_stage_saved("market maker share", &mm_market_share);

        progress.on_stage_start("exchange breakdown", 2, TOTAL);
        let exchange_breakdown = out.join(charts::EXCHANGE_FILE);
        charts::exchange::render(&tables::load_exchange_shares(input)?, &exchange_breakdown)?;
        progress.on_stage_saved("exchange breakdown", &exchange_breakdown);

        progress.on_stage_start("Kyle's lambda", 3, TOTAL);
        let kyle_lambda = out.join(charts::IMPACT_FILE);
        charts::impact::render(&tables::load_impact_coefficients(input)?, &kyle_lambda)?;
        progress.on_stage_saved("Kyle's lambda", &kyle_lambda);

        progress.on_stage_start("inventory pressure", 4, TOTAL);
        let inventory_pressure = out.join(charts::INVENTORY_FILE);
        charts::inventory::render(&tables::load_inventory_pressure(input)?, &inventory_pressure)?;
        progress.on_stage_saved("inventory pressure", &inventory_pressure);

        progress.on_stage_start("intraday profile", 5, TOTAL);
        let intraday_profile = out.join(charts::INTRADAY_FILE);
        charts::intraday::render(
            &tables::load_intraday_profile(input)?,
            &self.config.intraday.symbols,
            self.config.intraday.buckets,
            &intraday_profile,
        )?;
        progress.on_stage_saved("intraday profile", &intraday_profile);

        progress.on_report_complete(TOTAL, out);

        Ok(ChartPaths {
            spread_analysis,
            mm_market_share,
            exchange_breakdown,
            kyle_lambda,
            inventory_pressure,
            intraday_profile,
        })
    }
}
