// File: crates/antrieb-core/tests/hover.rs
// Purpose: Nearest-date / nearest-series lookup and the tooltip it produces.

use antrieb_core::dataset::year_start;
use antrieb_core::scale::ScaleTransform;
use antrieb_core::{nearest_index, nearest_series, Chart, ChartConfig, Dataset, SelectionState, Series};

fn dataset() -> Dataset {
    let dates = [2000, 2010, 2020].iter().map(|&y| year_start(y).expect("year")).collect();
    Dataset::new(
        "jahr",
        dates,
        vec![
            Series::new("Kanton Zürich", vec![Some(10.0), Some(12.0), Some(15.0)]),
            Series::new("Stadt Zürich", vec![None, Some(40.0), Some(50.0)]),
            Series::new("Winterthur", vec![Some(10.0), Some(2.0), None]),
        ],
    )
}

fn chart(default_series: Option<&str>) -> Chart {
    let config = ChartConfig { default_series: default_series.map(str::to_string), ..ChartConfig::default() };
    Chart::with_width(dataset(), config, 960)
}

#[test]
fn nearest_index_picks_closer_neighbour() {
    let keys = [2000.0, 2010.0, 2020.0];
    assert_eq!(nearest_index(&keys, 2006.0), Some(1));
    assert_eq!(nearest_index(&keys, 2014.0), Some(1));
    assert_eq!(nearest_index(&keys, 2016.0), Some(2));
}

#[test]
fn nearest_index_tie_goes_to_earlier() {
    let keys = [2000.0, 2010.0, 2020.0];
    assert_eq!(nearest_index(&keys, 2005.0), Some(0));
    assert_eq!(nearest_index(&keys, 2015.0), Some(1));
}

#[test]
fn nearest_index_outside_domain_clamps() {
    let keys = [2000.0, 2010.0, 2020.0];
    assert_eq!(nearest_index(&keys, 1900.0), Some(0));
    assert_eq!(nearest_index(&keys, 2100.0), Some(2));
    assert_eq!(nearest_index(&[2000.0], 2100.0), Some(0));
    assert_eq!(nearest_index(&[], 2000.0), None);
}

#[test]
fn gap_never_wins_nearest_series() {
    let ds = dataset();
    let mut sel = SelectionState::new();
    sel.toggle("Kanton Zürich");
    sel.toggle("Stadt Zürich");
    // Stadt Zürich has no value at index 0; Kanton wins despite being far off.
    assert_eq!(nearest_series(&ds, &sel, 0, 1_000.0), Some(0));
    // Only a gap is selected: nothing.
    let mut only_gap = SelectionState::new();
    only_gap.toggle("Stadt Zürich");
    assert_eq!(nearest_series(&ds, &only_gap, 0, 0.0), None);
}

#[test]
fn nearest_series_only_considers_selected() {
    let ds = dataset();
    let mut sel = SelectionState::new();
    sel.toggle("Stadt Zürich");
    // Winterthur (2.0) is closer to 0 but not selected.
    assert_eq!(nearest_series(&ds, &sel, 1, 0.0), Some(1));
    sel.toggle("Winterthur");
    assert_eq!(nearest_series(&ds, &sel, 1, 0.0), Some(2));
}

#[test]
fn equal_distance_keeps_earlier_series() {
    let ds = dataset();
    let mut sel = SelectionState::new();
    sel.toggle("Winterthur");
    sel.toggle("Kanton Zürich");
    // Both are 10.0 at index 0.
    assert_eq!(nearest_series(&ds, &sel, 0, 10.0), Some(0));
}

#[test]
fn hover_over_point_shows_tooltip_and_raises_series() {
    let mut ch = chart(Some("Kanton Zürich"));
    ch.toggle("Stadt Zürich");
    let keys = ch.date_keys().to_vec();
    let px = ch.x.to_px(keys[1]);
    let py = ch.y.to_px(40.0);
    ch.pointer_moved(px, py + ch.chart_top());

    let tip = ch.tooltip().expect("tooltip");
    assert_eq!(tip.series_index, 1);
    assert_eq!(tip.date_index, 1);
    assert_eq!(tip.lines, ["Antrieb: Stadt Zürich", "Jahr: 2010", "Anzahl: 40.00"]);
    assert!(ch.hover.dot_visible());
    assert_eq!(ch.draw_order().last(), Some(&1));
}

#[test]
fn same_hit_gives_same_text() {
    let mut ch = chart(Some("Kanton Zürich"));
    let keys = ch.date_keys().to_vec();
    let px = ch.x.to_px(keys[2]);
    let py = ch.y.to_px(15.0);

    ch.hover_at(px, py);
    let a = ch.tooltip().expect("first");
    ch.hover_at(px - 3.0, py + 40.0);
    let b = ch.tooltip().expect("second");

    assert_eq!((a.series_index, a.date_index), (b.series_index, b.date_index));
    assert_eq!(a.lines, b.lines);
    assert_eq!(a.anchor, b.anchor);
}

#[test]
fn direct_lookup_shows_dot_and_callout_together() {
    let mut ch = chart(Some("Kanton Zürich"));
    assert!(!ch.hover.pointer_inside);
    let keys = ch.date_keys().to_vec();
    ch.hover_at(ch.x.to_px(keys[1]), ch.y.to_px(12.0));
    assert!(ch.tooltip().is_some());
    assert!(ch.hover.dot_visible());
    assert_eq!(ch.hover.tooltip_visible(), ch.hover.dot_visible());

    ch.pointer_left();
    assert!(!ch.hover.tooltip_visible());
    assert!(ch.tooltip().is_none());
}

#[test]
fn nothing_selected_means_no_tooltip_anywhere() {
    let mut ch = chart(None);
    assert_eq!(ch.selection.selected_count(), 0);
    ch.pointer_entered();
    for px in [0.0, 100.0, 480.0, 870.0, 2000.0] {
        for py in [0.0, 250.0, 499.0] {
            assert!(ch.hover_at(px, py).is_none());
            assert!(ch.tooltip().is_none());
            assert!(!ch.hover.dot_visible());
        }
    }
}

#[test]
fn absent_default_series_selects_nothing_usable() {
    let mut ch = chart(Some("Kanton Bern"));
    ch.pointer_entered();
    let keys = ch.date_keys().to_vec();
    let px = ch.x.to_px(keys[0]);
    assert!(ch.hover_at(px, 100.0).is_none());
    assert!(!ch.selection.is_selected("Kanton Zürich"));
}

#[test]
fn pointer_leave_hides_everything() {
    let mut ch = chart(Some("Kanton Zürich"));
    let keys = ch.date_keys().to_vec();
    ch.pointer_moved(ch.x.to_px(keys[0]), ch.chart_top() + 200.0);
    assert!(ch.tooltip().is_some());
    ch.pointer_left();
    assert!(ch.tooltip().is_none());
    assert!(!ch.hover.dot_visible());
}

#[test]
fn moving_into_legend_counts_as_leave() {
    let mut ch = chart(Some("Kanton Zürich"));
    let keys = ch.date_keys().to_vec();
    ch.pointer_moved(ch.x.to_px(keys[0]), ch.chart_top() + 200.0);
    assert!(ch.hover.pointer_inside);
    ch.pointer_moved(20.0, 1.0);
    assert!(!ch.hover.pointer_inside);
    assert!(ch.tooltip().is_none());
}
