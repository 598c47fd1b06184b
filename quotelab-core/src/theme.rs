//! Shared palette and font tokens for the report charts.
//!
//! # Color palette
//! - **Symbol bars**: viridis-style ramp, sampled away from the dark ends
//! - **Pie slices**: pastel categorical palette
//! - **Exchanges**: fixed high-contrast categorical palette
//! - **Sign pairs**: green/red for price impact, blue/orange for inventory

use plotters::style::RGBColor;

pub const TITLE_FONT: (&str, i32) = ("sans-serif", 26);
pub const CAPTION_FONT: (&str, i32) = ("sans-serif", 22);
pub const VALUE_FONT: (&str, i32) = ("sans-serif", 13);
pub const NOTE_FONT: (&str, i32) = ("sans-serif", 14);

/// Positive lambda: prices move with order flow.
pub const IMPACT_POSITIVE: RGBColor = RGBColor(46, 204, 113);
/// Negative lambda: prices mean-revert.
pub const IMPACT_NEGATIVE: RGBColor = RGBColor(231, 76, 60);

/// Positive imbalance: long bias.
pub const INVENTORY_LONG: RGBColor = RGBColor(52, 152, 219);
/// Negative imbalance: short bias.
pub const INVENTORY_SHORT: RGBColor = RGBColor(230, 126, 34);

/// Annotation box backgrounds for the price-impact chart.
pub const NOTE_POSITIVE_BG: RGBColor = RGBColor(144, 238, 144);
pub const NOTE_NEGATIVE_BG: RGBColor = RGBColor(240, 128, 128);

const EXCHANGE_PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

const PASTEL_PALETTE: [RGBColor; 12] = [
    RGBColor(141, 211, 199),
    RGBColor(255, 255, 179),
    RGBColor(190, 186, 218),
    RGBColor(251, 128, 114),
    RGBColor(128, 177, 211),
    RGBColor(253, 180, 98),
    RGBColor(179, 222, 105),
    RGBColor(252, 205, 229),
    RGBColor(217, 217, 217),
    RGBColor(188, 128, 189),
    RGBColor(204, 235, 197),
    RGBColor(255, 237, 111),
];

// Viridis anchor points at t = 0, 0.25, 0.5, 0.75, 1.
const VIRIDIS_ANCHORS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Sample the viridis-style ramp at `t` in `[0, 1]` (clamped).
pub fn viridis(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS_ANCHORS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS_ANCHORS.len() - 1);
    let frac = scaled - lo as f64;

    let (r0, g0, b0) = VIRIDIS_ANCHORS[lo];
    let (r1, g1, b1) = VIRIDIS_ANCHORS[hi];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// One ramp color per symbol bar, sampled between 0.2 and 0.8 so the bars
/// stay away from the near-black and near-yellow ends.
pub fn symbol_ramp(n: usize) -> Vec<RGBColor> {
    match n {
        0 => Vec::new(),
        1 => vec![viridis(0.2)],
        _ => (0..n)
            .map(|i| viridis(0.2 + 0.6 * i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Pastel color for pie slice `i`, cycling past the palette end.
pub fn pastel(i: usize) -> RGBColor {
    PASTEL_PALETTE[i % PASTEL_PALETTE.len()]
}

/// Categorical color for exchange bar `i`, cycling past the palette end.
pub fn exchange_color(i: usize) -> RGBColor {
    EXCHANGE_PALETTE[i % EXCHANGE_PALETTE.len()]
}

/// Line color for intraday series `i`.
pub fn line_color(i: usize) -> RGBColor {
    EXCHANGE_PALETTE[i % EXCHANGE_PALETTE.len()]
}

/// Sign-based color: positive values draw with `pos`, others with `neg`.
pub fn sign_color(value: f64, pos: RGBColor, neg: RGBColor) -> RGBColor {
    if value > 0.0 {
        pos
    } else {
        neg
    }
}
