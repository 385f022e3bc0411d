// File: crates/antrieb-core/src/axis.rs
// Summary: Axis tick positions and labels for the bottom (years) and left (values) axes.

use crate::format::NumberLocale;
use crate::scale::{LinearScale, ScaleTransform, TimeScale};

/// Tick length outward from the axis line, in pixels.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between tick end and label.
pub const TICK_PADDING: f32 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis.
    pub pos: f32,
    pub label: String,
}

/// Year ticks along the x axis, labelled `%Y`.
pub fn bottom_ticks(x: &TimeScale, count: usize) -> Vec<Tick> {
    x.year_ticks(count)
        .into_iter()
        .map(|(year, ms)| Tick { pos: x.to_px(ms), label: format!("{year:04}") })
        .collect()
}

/// Value ticks along the y axis, grouped with the locale's thousands separator.
pub fn left_ticks(y: &LinearScale, count: usize, locale: &NumberLocale) -> Vec<Tick> {
    let precision = y.tick_precision(count);
    y.ticks(count)
        .into_iter()
        .map(|v| Tick { pos: y.to_px(v), label: locale.grouped(v, precision) })
        .collect()
}
