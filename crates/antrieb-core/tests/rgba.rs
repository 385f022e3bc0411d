// File: crates/antrieb-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use antrieb_core::dataset::year_start;
use antrieb_core::scale::ScaleTransform;
use antrieb_core::theme::{rgb, Theme};
use antrieb_core::{Chart, ChartConfig, Dataset, Palette, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let dates = [2000, 2001, 2002].iter().map(|&y| year_start(y).expect("year")).collect();
    let ds = Dataset::new(
        "jahr",
        dates,
        vec![
            Series::new("Kanton Zürich", vec![Some(1.0), Some(2.0), Some(3.0)]),
            Series::new("Stadt Zürich", vec![Some(3.0), None, Some(1.0)]),
        ],
    );
    let chart = Chart::with_width(ds, ChartConfig::default(), 640);

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w, chart.width());
    assert_eq!(h, chart.height());
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let pixel = |x: f32, y: f32| {
        let i = y as usize * stride + x as usize * 4;
        (px[i], px[i + 1], px[i + 2], px[i + 3])
    };

    // Background is opaque white in the light theme.
    assert_eq!(pixel(0.0, 0.0), (255, 255, 255, 255));

    // Swatches: selected in category color, the other muted.
    let palette = Palette::default();
    let entries = &chart.legend().entries;
    for (k, e) in entries.iter().enumerate() {
        let s = e.swatch;
        let got = pixel(s.left + s.width() / 2.0, s.top + s.height() / 2.0);
        let want = if k == 0 { palette.category(0) } else { rgb(0xEEEEEE) };
        assert_eq!(got, (want.r(), want.g(), want.b(), 255), "swatch {k}");
    }
}

#[test]
fn dark_theme_lines_stand_out_from_background() {
    let dates = [2000, 2001, 2002].iter().map(|&y| year_start(y).expect("year")).collect();
    let ds = Dataset::new("jahr", dates, vec![Series::new("Kanton Zürich", vec![Some(1.0), Some(2.0), Some(3.0)])]);
    let chart = Chart::with_width(ds, ChartConfig::default(), 640);

    let theme = Theme::dark();
    let opts = RenderOptions { theme, draw_labels: false };
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Middle vertex of the selected line, in surface coordinates.
    let keys = chart.date_keys();
    let x = chart.x.to_px(keys[1]) as usize;
    let y = (chart.y.to_px(2.0) + chart.chart_top()) as usize;
    let i = y * stride + x * 4;
    let got = [px[i], px[i + 1], px[i + 2]];

    let bg = theme.background;
    assert_eq!([px[0], px[1], px[2]], [bg.r(), bg.g(), bg.b()]);
    let diff: i32 = got.iter().zip([bg.r(), bg.g(), bg.b()]).map(|(&a, b)| (a as i32 - b as i32).abs()).sum();
    assert!(diff > 60, "line pixel {got:?} too close to background {bg:?}");
}
