//! Market-maker share pie chart.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

use crate::tables::MakerShare;
use crate::theme;

pub fn render(rows: &[MakerShare], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Market Maker Market Share (10M Quotes)", theme::TITLE_FONT)?;

    let sizes: Vec<f64> = rows.iter().map(|r| r.pct).collect();
    let labels: Vec<String> = rows.iter().map(|r| r.mmid.clone()).collect();
    let colors: Vec<RGBColor> = (0..rows.len()).map(theme::pastel).collect();

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.36;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 18).into_font());
    pie.percentages(("sans-serif", 15).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
