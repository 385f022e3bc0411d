// File: crates/antrieb-core/src/hover.rs
// Summary: Pointer → nearest date index → nearest selected series, and the tooltip it yields.

use crate::dataset::Dataset;
use crate::format::NumberLocale;
use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::selection::SelectionState;

/// First index in `keys[lo..]` whose key is not less than `x`.
/// `keys` must be ascending; `lo` may exceed `keys.len()`.
pub fn bisect_left(keys: &[f64], x: f64, mut lo: usize) -> usize {
    let mut hi = keys.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if keys[mid] < x {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Index of the key closest to `x`. Only the two keys around the insertion
/// point are compared; on an exact tie the earlier one wins.
pub fn nearest_index(keys: &[f64], x: f64) -> Option<usize> {
    if keys.is_empty() {
        return None;
    }
    let i1 = bisect_left(keys, x, 1);
    let i0 = i1 - 1;
    match keys.get(i1) {
        Some(&k1) if x - keys[i0] > k1 - x => Some(i1),
        _ => Some(i0),
    }
}

/// Selected series whose value at `index` is closest to `target`.
/// Gaps never qualify; on equal distance the earlier series wins.
pub fn nearest_series(dataset: &Dataset, selection: &SelectionState, index: usize, target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (si, s) in dataset.series.iter().enumerate() {
        if !selection.is_selected(&s.name) {
            continue;
        }
        let Some(v) = s.value(index) else { continue };
        let dist = (v - target).abs();
        if dist.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((si, dist));
        }
    }
    best.map(|(si, _)| si)
}

/// Result of a successful hover lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverHit {
    pub date_index: usize,
    pub series_index: usize,
    /// Pixel position of the data point (dot and callout anchor).
    pub anchor: (f32, f32),
}

/// Everything the lookup reads.
pub struct HoverContext<'a> {
    pub dataset: &'a Dataset,
    pub date_keys: &'a [f64],
    pub x: &'a TimeScale,
    pub y: &'a LinearScale,
    pub selection: &'a SelectionState,
}

impl HoverContext<'_> {
    /// Map a pointer position (plot-surface pixels) to a hit, if any
    /// selected series has a value at the nearest date.
    pub fn locate(&self, px: f32, py: f32) -> Option<HoverHit> {
        let xm = self.x.from_px(px);
        let ym = self.y.from_px(py);
        let date_index = nearest_index(self.date_keys, xm)?;
        let series_index = nearest_series(self.dataset, self.selection, date_index, ym)?;
        let value = self.dataset.series[series_index].value(date_index)?;
        let anchor = (self.x.to_px(self.date_keys[date_index]), self.y.to_px(value));
        Some(HoverHit { date_index, series_index, anchor })
    }
}

/// Field names shown in the callout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipLabels {
    pub series: String,
    pub year: String,
    pub value: String,
}

impl Default for TooltipLabels {
    fn default() -> Self {
        Self { series: "Antrieb".into(), year: "Jahr".into(), value: "Anzahl".into() }
    }
}

/// The three callout lines for `hit`: series name, year, value with two decimals.
pub fn tooltip_lines(dataset: &Dataset, hit: &HoverHit, labels: &TooltipLabels, locale: &NumberLocale) -> Vec<String> {
    let series = &dataset.series[hit.series_index];
    let year = dataset.year(hit.date_index).map(|y| format!("{y:04}")).unwrap_or_default();
    let value = series.value(hit.date_index).map(|v| locale.fixed(v, 2)).unwrap_or_default();
    vec![
        format!("{}: {}", labels.series, series.name),
        format!("{}: {}", labels.year, year),
        format!("{}: {}", labels.value, value),
    ]
}

/// Hover layer state: whether the pointer is over the chart, and the current hit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    pub pointer_inside: bool,
    pub hit: Option<HoverHit>,
}

impl HoverState {
    pub fn enter(&mut self) {
        self.pointer_inside = true;
    }

    pub fn leave(&mut self) {
        self.pointer_inside = false;
        self.hit = None;
    }

    pub fn dot_visible(&self) -> bool {
        self.pointer_inside && self.hit.is_some()
    }

    /// Dot and callout always show together.
    pub fn tooltip_visible(&self) -> bool {
        self.dot_visible()
    }
}
