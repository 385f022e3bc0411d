// File: crates/antrieb-core/src/lib.rs
// Summary: Core library entry point; dataset loading, interactive chart state and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geometry;
pub mod hover;
pub mod legend;
pub mod render;
pub mod scale;
pub mod selection;
pub mod series;
pub mod source;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use chart::{Chart, Tooltip};
pub use config::{ChartConfig, DEFAULT_SERIES};
pub use dataset::Dataset;
pub use error::{ChartError, Result};
pub use hover::{nearest_index, nearest_series, HoverHit, TooltipLabels};
pub use render::RenderOptions;
pub use selection::SelectionState;
pub use series::Series;
pub use source::{DataSource, DEFAULT_DATA_URL};
pub use theme::{Palette, Theme};
