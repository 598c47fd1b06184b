//! Per-stage renderer tests: minimal valid rows in, non-empty PNG out.

use quotelab_core::charts;
use quotelab_core::tables::{
    ExchangeShare, ImpactCoefficient, IntradayPoint, InventoryPressure, MakerShare, SpreadStat,
};
use std::path::Path;

fn assert_png_written(path: &Path) {
    let meta = std::fs::metadata(path)
        .unwrap_or_else(|_| panic!("missing chart: {}", path.display()));
    assert!(meta.len() > 0, "empty chart: {}", path.display());
}

#[test]
fn spread_chart_renders() {
    let temp = tempfile::tempdir().unwrap();
    let rows = vec![
        SpreadStat {
            sym: "AAPL".into(),
            avg_spread_bps: 1.23,
            quote_count: 5_000_000,
        },
        SpreadStat {
            sym: "MSFT".into(),
            avg_spread_bps: 2.50,
            quote_count: 3_000_000,
        },
    ];
    let path = temp.path().join("spread_analysis.png");
    charts::spread::render(&rows, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn market_share_pie_renders() {
    let temp = tempfile::tempdir().unwrap();
    let rows = vec![
        MakerShare {
            mmid: "CDRG".into(),
            pct: 41.0,
        },
        MakerShare {
            mmid: "VIRT".into(),
            pct: 59.0,
        },
    ];
    let path = temp.path().join("mm_market_share.png");
    charts::market_share::render(&rows, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn exchange_breakdown_renders() {
    let temp = tempfile::tempdir().unwrap();
    let rows = vec![
        ExchangeShare {
            exchange: "NSDQ".into(),
            pct: 40.2,
        },
        ExchangeShare {
            exchange: "ARCA".into(),
            pct: 59.8,
        },
    ];
    let path = temp.path().join("exchange_breakdown.png");
    charts::exchange::render(&rows, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn impact_chart_renders_with_mixed_signs() {
    let temp = tempfile::tempdir().unwrap();
    let rows = vec![
        ImpactCoefficient {
            sym: "AAPL".into(),
            kyle_lambda: 2e-5,
        },
        ImpactCoefficient {
            sym: "MSFT".into(),
            kyle_lambda: -1e-5,
        },
    ];
    let path = temp.path().join("kyle_lambda.png");
    charts::impact::render(&rows, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn inventory_chart_renders_with_mixed_signs() {
    let temp = tempfile::tempdir().unwrap();
    let rows = vec![
        InventoryPressure {
            mmid: "CDRG".into(),
            avg_imbalance: 0.12,
        },
        InventoryPressure {
            mmid: "VIRT".into(),
            avg_imbalance: -0.08,
        },
    ];
    let path = temp.path().join("inventory_pressure.png");
    charts::inventory::render(&rows, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn inventory_chart_renders_with_no_rows() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("inventory_pressure.png");
    charts::inventory::render(&[], &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn intraday_chart_renders() {
    let temp = tempfile::tempdir().unwrap();
    let mut rows = Vec::new();
    for sym in ["AAPL", "MSFT", "NVDA"] {
        for bucket in 0..5 {
            rows.push(IntradayPoint {
                sym: sym.into(),
                avg_spread_bps: 1.5 + bucket as f64 * 0.1,
                quote_count: 1_000 + bucket * 50,
            });
        }
    }
    let symbols: Vec<String> = ["AAPL", "MSFT", "NVDA"].iter().map(|s| s.to_string()).collect();
    let path = temp.path().join("intraday_profile.png");
    charts::intraday::render(&rows, &symbols, 100, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn intraday_bucket_cap_limits_each_series() {
    // A symbol with more rows than the cap still renders; the cap applies
    // per symbol group, not to the file as a whole.
    let temp = tempfile::tempdir().unwrap();
    let rows: Vec<IntradayPoint> = (0..20)
        .map(|bucket| IntradayPoint {
            sym: "AAPL".into(),
            avg_spread_bps: 2.0,
            quote_count: 100 + bucket,
        })
        .collect();
    let path = temp.path().join("intraday_profile.png");
    charts::intraday::render(&rows, &["AAPL".to_string()], 5, &path).unwrap();
    assert_png_written(&path);
}

#[test]
fn intraday_chart_tolerates_absent_symbols() {
    let temp = tempfile::tempdir().unwrap();
    let rows = vec![IntradayPoint {
        sym: "AAPL".into(),
        avg_spread_bps: 2.0,
        quote_count: 100,
    }];
    let symbols = vec!["AAPL".to_string(), "ZZZZ".to_string()];
    let path = temp.path().join("intraday_profile.png");
    charts::intraday::render(&rows, &symbols, 100, &path).unwrap();
    assert_png_written(&path);
}
