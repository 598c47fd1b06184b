//! Spread statistics figure: average spread and quote count, side by side.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

use super::draw_bar_panel;
use crate::tables::SpreadStat;
use crate::theme;

pub fn render(rows: &[SpreadStat], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1400, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let labels: Vec<&str> = rows.iter().map(|r| r.sym.as_str()).collect();
    let colors = theme::symbol_ramp(rows.len());

    let spreads: Vec<f64> = rows.iter().map(|r| r.avg_spread_bps).collect();
    draw_bar_panel(
        &panels[0],
        "Bid-Ask Spread by Symbol (10M Quotes)",
        "Symbol",
        "Average Spread (Basis Points)",
        &labels,
        &spreads,
        &colors,
        true,
    )?;

    let counts: Vec<f64> = rows.iter().map(|r| r.quote_count_millions()).collect();
    draw_bar_panel(
        &panels[1],
        "Quote Distribution by Symbol",
        "Symbol",
        "Quote Count (Millions)",
        &labels,
        &counts,
        &colors,
        false,
    )?;

    root.present()?;
    Ok(())
}
