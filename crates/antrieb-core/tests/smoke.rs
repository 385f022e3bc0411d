// File: crates/antrieb-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing PNG and SVG files.

use antrieb_core::{Chart, ChartConfig, Dataset, RenderOptions};

const CSV: &str = "\
jahr,Kanton Zürich,Stadt Zürich,Winterthur
2010,500.2,120.5,80
2011,510.9,,82.1
2012,530.4,125,n/a
2013,541.0,126.7,85.3
";

#[test]
fn render_smoke_png_and_svg() {
    let ds = Dataset::from_csv_str(CSV).expect("parse");
    let mut chart = Chart::new(ds, ChartConfig::default());
    chart.pointer_moved(400.0, chart.chart_top() + 200.0);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let svg = chart.render_to_svg_bytes(&opts);
    let text = String::from_utf8(svg).expect("utf-8 svg");
    assert!(text.contains("<svg"), "should be an SVG document");
}

#[test]
fn resize_moves_x_range_and_keeps_height() {
    let ds = Dataset::from_csv_str(CSV).expect("parse");
    let mut chart = Chart::new(ds, ChartConfig::default());
    let h = chart.height();
    chart.resize(1400);
    assert_eq!(chart.width(), 1400);
    assert_eq!(chart.x.range(), (90.0, 1310.0));
    assert_eq!(chart.height(), h);

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render after resize");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.width(), 1400);
}

#[test]
fn hover_rerun_after_narrow_resize() {
    let ds = Dataset::from_csv_str(CSV).expect("parse");
    let mut chart = Chart::new(ds, ChartConfig::default());
    let wide_height = chart.height();
    let cursor = (600.0, chart.chart_top() + 200.0);
    chart.pointer_moved(cursor.0, cursor.1);
    assert!(chart.tooltip().is_some());

    chart.resize(400);
    assert!(chart.tooltip().is_none(), "stale anchor dropped on resize");
    // The legend can only gain rows when the width shrinks.
    assert!(chart.height() >= wide_height);
    assert_eq!(chart.height() as f32, chart.chart_top() + chart.config.height as f32);

    let cursor = (cursor.0, cursor.1 - wide_height as f32 + chart.height() as f32);
    chart.pointer_moved(cursor.0, cursor.1);
    let tip = chart.tooltip().expect("hover restored at the same pointer");
    let (x0, x1) = chart.x.range();
    assert!(tip.anchor.0 >= x0 - 0.5 && tip.anchor.0 <= x1 + 0.5);
}
