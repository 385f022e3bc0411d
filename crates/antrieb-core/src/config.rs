// File: crates/antrieb-core/src/config.rs
// Summary: Chart configuration (data source, default selection, labels, locale, sizes).

use crate::format::NumberLocale;
use crate::hover::TooltipLabels;
use crate::source::DataSource;
use crate::theme::Palette;
use crate::types::{Insets, HEIGHT, TICK_COUNT};

/// Series highlighted when the chart first appears.
pub const DEFAULT_SERIES: &str = "Kanton Zürich";

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub source: DataSource,
    /// Toggled on once after load. A name missing from the dataset selects
    /// nothing, which leaves hovering without a tooltip.
    pub default_series: Option<String>,
    /// Y axis title drawn beside the topmost tick.
    pub y_label: String,
    pub tooltip_labels: TooltipLabels,
    pub locale: NumberLocale,
    pub palette: Palette,
    /// Height of the chart area (excluding the legend), in pixels.
    pub height: i32,
    pub insets: Insets,
    pub tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            default_series: Some(DEFAULT_SERIES.to_string()),
            y_label: "Anzahl, in Tausend".to_string(),
            tooltip_labels: TooltipLabels::default(),
            locale: NumberLocale::default(),
            palette: Palette::default(),
            height: HEIGHT,
            insets: Insets::default(),
            tick_count: TICK_COUNT,
        }
    }
}
