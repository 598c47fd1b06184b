//! Exchange breakdown horizontal bar chart.

use anyhow::Result;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::tables::ExchangeShare;
use crate::theme;

pub fn render(rows: &[ExchangeShare], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = rows.len();
    let max = rows.iter().map(|r| r.pct).fold(f64::NEG_INFINITY, f64::max);
    let hi = if max > 0.0 { max * 1.18 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Quote Distribution by Exchange", theme::CAPTION_FONT)
        .margin(12)
        .x_label_area_size(38)
        .y_label_area_size(72)
        .build_cartesian_2d(0.0..hi, (0..n.max(1)).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Market Share (%)")
        .y_desc("Exchange")
        .y_labels(n.max(1))
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => rows[*i].exchange.clone(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, r)| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (r.pct, SegmentValue::Exact(i + 1)),
            ],
            theme::exchange_color(i).filled(),
        )
    }))?;
    chart.draw_series(rows.iter().enumerate().map(|(i, r)| {
        Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (r.pct, SegmentValue::Exact(i + 1)),
            ],
            BLACK,
        )
    }))?;

    let style =
        TextStyle::from(theme::VALUE_FONT.into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    let pad = hi * 0.01;
    chart.draw_series(rows.iter().enumerate().map(|(i, r)| {
        Text::new(
            format!("{:.2}%", r.pct),
            (r.pct + pad, SegmentValue::CenterOf(i)),
            style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}
