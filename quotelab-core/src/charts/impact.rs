//! Price-impact (Kyle's lambda) bar chart with interpretation notes.

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use super::draw_bar_panel;
use crate::tables::ImpactCoefficient;
use crate::theme;

const POSITIVE_NOTE: [&str; 2] = [
    "Positive lambda: prices move WITH order flow",
    "(information in trades)",
];
const NEGATIVE_NOTE: [&str; 2] = [
    "Negative lambda: prices mean-revert",
    "(noise trading dominates)",
];

pub fn render(rows: &[ImpactCoefficient], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = rows.iter().map(|r| r.sym.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.display_lambda()).collect();
    let colors: Vec<RGBColor> = rows
        .iter()
        .map(|r| theme::sign_color(r.kyle_lambda, theme::IMPACT_POSITIVE, theme::IMPACT_NEGATIVE))
        .collect();

    draw_bar_panel(
        &root,
        "Price Impact Coefficient by Symbol",
        "Symbol",
        "Kyle's Lambda (x1e-5)",
        &labels,
        &values,
        &colors,
        false,
    )?;

    draw_note(&root, (80, 56), &POSITIVE_NOTE, theme::NOTE_POSITIVE_BG)?;
    draw_note(&root, (80, 506), &NEGATIVE_NOTE, theme::NOTE_NEGATIVE_BG)?;

    root.present()?;
    Ok(())
}

/// Annotation box drawn in pixel space over the chart corner.
fn draw_note(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    pos: (i32, i32),
    lines: &[&str],
    background: RGBColor,
) -> Result<()> {
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32 * 7 + 14;
    let height = lines.len() as i32 * 18 + 10;
    area.draw(&Rectangle::new(
        [pos, (pos.0 + width, pos.1 + height)],
        background.mix(0.5).filled(),
    ))?;
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            (*line).to_string(),
            (pos.0 + 7, pos.1 + 7 + i as i32 * 18),
            theme::NOTE_FONT.into_font(),
        ))?;
    }
    Ok(())
}
