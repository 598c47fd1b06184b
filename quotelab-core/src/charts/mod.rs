//! One renderer per report stage, plus the shared bar-panel plumbing.
//!
//! Every renderer takes already-loaded rows and an output path, draws one
//! figure onto a PNG backend, and propagates any backend error. No renderer
//! reads or writes anything beyond its own output file.

pub mod exchange;
pub mod impact;
pub mod intraday;
pub mod inventory;
pub mod market_share;
pub mod spread;

use anyhow::Result;
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::theme;

/// Fixed output filenames, one per stage, in presentation order.
pub const SPREAD_FILE: &str = "spread_analysis.png";
pub const MARKET_SHARE_FILE: &str = "mm_market_share.png";
pub const EXCHANGE_FILE: &str = "exchange_breakdown.png";
pub const IMPACT_FILE: &str = "kyle_lambda.png";
pub const INVENTORY_FILE: &str = "inventory_pressure.png";
pub const INTRADAY_FILE: &str = "intraday_profile.png";

/// Vertical bar panel over a categorical x axis.
///
/// Bars fill their segment and get a black border; a zero baseline is drawn
/// when any value is negative. With `value_labels` set, each bar carries its
/// value ("%.2f") above the top.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_bar_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[&str],
    values: &[f64],
    colors: &[RGBColor],
    value_labels: bool,
) -> Result<()> {
    let n = labels.len();
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = if max > 0.0 { max * 1.15 } else { 1.0 };
    let lo = if min < 0.0 { min * 1.15 } else { 0.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, theme::CAPTION_FONT)
        .margin(12)
        .x_label_area_size(38)
        .y_label_area_size(58)
        .build_cartesian_2d((0..n.max(1)).into_segmented(), lo..hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(n.max(1))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => labels[*i].to_string(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), v),
            ],
            colors[i % colors.len().max(1)].filled(),
        )
    }))?;
    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), v),
            ],
            BLACK,
        )
    }))?;

    if lo < 0.0 {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (SegmentValue::Exact(0usize), 0.0),
                (SegmentValue::Exact(n), 0.0),
            ],
            BLACK,
        )))?;
    }

    if value_labels {
        let style = TextStyle::from(theme::VALUE_FONT.into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let pad = (hi - lo) * 0.015;
        chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
            Text::new(
                format!("{v:.2}"),
                (SegmentValue::CenterOf(i), v + pad),
                style.clone(),
            )
        }))?;
    }

    Ok(())
}
