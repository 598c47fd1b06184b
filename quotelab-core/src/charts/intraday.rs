//! Intraday profile figure: spread and quote activity, one line per symbol.

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::tables::IntradayPoint;
use crate::theme;

pub fn render(
    rows: &[IntradayPoint],
    symbols: &[String],
    bucket_cap: usize,
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (1400, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    // One series per selected symbol, leading buckets only. Rows are grouped
    // by symbol and ordered by bucket, so the bucket index is the row offset
    // within the group.
    let series: Vec<(&str, Vec<&IntradayPoint>)> = symbols
        .iter()
        .map(|sym| {
            let points: Vec<&IntradayPoint> = rows
                .iter()
                .filter(|r| &r.sym == sym)
                .take(bucket_cap)
                .collect();
            (sym.as_str(), points)
        })
        .collect();

    draw_line_panel(
        &panels[0],
        "Intraday Spread Profile",
        "Time Bucket (5-min intervals)",
        "Average Spread (bps)",
        &series,
        |p| p.avg_spread_bps,
    )?;
    draw_line_panel(
        &panels[1],
        "Intraday Quote Activity (U-Shaped Pattern Expected)",
        "Time Bucket (5-min intervals)",
        "Quote Count",
        &series,
        |p| p.quote_count as f64,
    )?;

    root.present()?;
    Ok(())
}

fn draw_line_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[(&str, Vec<&IntradayPoint>)],
    value: impl Fn(&IntradayPoint) -> f64,
) -> Result<()> {
    let x_max = series.iter().map(|(_, pts)| pts.len()).max().unwrap_or(0);
    let y_max = series
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|p| value(p)))
        .fold(f64::NEG_INFINITY, f64::max);
    let hi = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, theme::CAPTION_FONT)
        .margin(12)
        .x_label_area_size(38)
        .y_label_area_size(64)
        .build_cartesian_2d(0..x_max.max(1), 0.0..hi)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    for (i, (sym, points)) in series.iter().enumerate() {
        let style = theme::line_color(i).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(x, p)| (x, value(p))),
                style,
            ))?
            .label(*sym)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
