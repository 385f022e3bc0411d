// File: crates/antrieb-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels (the window/container width at start).
pub const WIDTH: i32 = 960;
/// Height of the chart area below the legend, in pixels.
pub const HEIGHT: i32 = 500;
/// Height of one legend row, in pixels.
pub const LEGEND_ROW_HEIGHT: f32 = 26.0;
/// Ticks requested from each axis.
pub const TICK_COUNT: usize = 10;

/// Chart margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(90, 90, 20, 70)
    }
}
