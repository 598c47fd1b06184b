//! Market-maker inventory pressure bar chart.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

use super::draw_bar_panel;
use crate::tables::InventoryPressure;
use crate::theme;

pub fn render(rows: &[InventoryPressure], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = rows.iter().map(|r| r.mmid.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.imbalance_pct()).collect();
    let colors: Vec<RGBColor> = rows
        .iter()
        .map(|r| {
            theme::sign_color(r.avg_imbalance, theme::INVENTORY_LONG, theme::INVENTORY_SHORT)
        })
        .collect();

    draw_bar_panel(
        &root,
        "Market Maker Inventory Pressure (Positive = Long Bias)",
        "Market Maker",
        "Average Size Imbalance (%)",
        &labels,
        &values,
        &colors,
        false,
    )?;

    root.present()?;
    Ok(())
}
