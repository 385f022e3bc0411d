// File: crates/antrieb-core/src/legend.rs
// Summary: Legend swatch layout (wrapping rows) and click hit testing.

use crate::geometry::RectF;
use crate::types::LEGEND_ROW_HEIGHT;

const PAD_X: f32 = 10.0;
const SWATCH: f32 = 15.0;
const SWATCH_GAP: f32 = 6.0;
const ENTRY_GAP: f32 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub series_index: usize,
    pub name: String,
    /// Clickable area: swatch plus label.
    pub bounds: RectF,
    pub swatch: RectF,
    /// Left end of the label baseline.
    pub label_origin: (f32, f32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub height: f32,
}

impl Legend {
    /// Lay out one entry per name, left to right, wrapping when `width` is
    /// exhausted. `measure` returns a label's advance width in pixels.
    pub fn layout<'a, I, F>(names: I, width: f32, measure: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> f32,
    {
        let mut entries = Vec::new();
        let mut x = PAD_X;
        let mut row = 0usize;
        for (series_index, name) in names.into_iter().enumerate() {
            let entry_w = SWATCH + SWATCH_GAP + measure(name).max(0.0);
            if x > PAD_X && x + entry_w > width - PAD_X {
                row += 1;
                x = PAD_X;
            }
            let top = row as f32 * LEGEND_ROW_HEIGHT;
            let mid = top + LEGEND_ROW_HEIGHT * 0.5;
            entries.push(LegendEntry {
                series_index,
                name: name.to_string(),
                bounds: RectF::from_ltwh(x, top, entry_w, LEGEND_ROW_HEIGHT),
                swatch: RectF::from_ltwh(x, mid - SWATCH * 0.5, SWATCH, SWATCH),
                label_origin: (x + SWATCH + SWATCH_GAP, mid + 4.5),
            });
            x += entry_w + ENTRY_GAP;
        }
        let height = if entries.is_empty() { 0.0 } else { (row + 1) as f32 * LEGEND_ROW_HEIGHT };
        Self { entries, height }
    }

    /// Series index of the entry under `(x, y)` (legend-local pixels).
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.entries.iter().find(|e| e.bounds.contains(x, y)).map(|e| e.series_index)
    }
}
