// File: crates/antrieb-core/src/chart.rs
// Summary: Interactive chart state: scales, selection, hover, legend and draw order.
// Notes:
// - Surface coordinates put the legend strip at the top; the chart area
//   (axes, lines, hover layer) starts at `legend.height`.
// - All handlers run to completion and report whether a redraw is needed.

use skia_safe as skia;
use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::hover::{tooltip_lines, HoverContext, HoverHit, HoverState};
use crate::legend::Legend;
use crate::scale::{LinearScale, TimeScale};
use crate::selection::SelectionState;
use crate::text::TextShaper;
use crate::types::WIDTH;

/// Font size of legend labels.
pub(crate) const LEGEND_FONT_SIZE: f32 = 13.0;

/// Callout contents for the current hover hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub series_index: usize,
    pub date_index: usize,
    /// Chart-area pixels.
    pub anchor: (f32, f32),
    pub lines: Vec<String>,
    pub color: skia::Color,
}

pub struct Chart {
    pub dataset: Dataset,
    pub config: ChartConfig,
    pub x: TimeScale,
    pub y: LinearScale,
    pub selection: SelectionState,
    pub hover: HoverState,
    date_keys: Vec<f64>,
    draw_order: Vec<usize>,
    legend: Legend,
    width: i32,
    pub(crate) text: TextShaper,
}

impl Chart {
    /// Build scales and legend for `width`, then toggle the configured default series.
    pub fn new(dataset: Dataset, config: ChartConfig) -> Self {
        Self::with_width(dataset, config, WIDTH)
    }

    pub fn with_width(dataset: Dataset, config: ChartConfig, width: i32) -> Self {
        let date_keys = dataset.date_keys();
        let insets = config.insets;
        let x_domain = dataset.date_extent().unwrap_or((0.0, 1.0));
        let y_domain = dataset.value_extent().unwrap_or((0.0, 1.0));
        let x = TimeScale::new(x_domain, insets.left as f32, (width - insets.right as i32) as f32);
        let y = LinearScale::new(y_domain, ((config.height - insets.bottom as i32) as f32, insets.top as f32))
            .nice(config.tick_count);
        let draw_order = (0..dataset.series.len()).collect();

        let mut chart = Self {
            dataset,
            config,
            x,
            y,
            selection: SelectionState::new(),
            hover: HoverState::default(),
            date_keys,
            draw_order,
            legend: Legend::default(),
            width,
            text: TextShaper::new(),
        };
        chart.relayout_legend();

        if let Some(name) = chart.config.default_series.clone() {
            if chart.dataset.series_index(&name).is_none() {
                warn!(series = %name, "default series not in dataset; nothing selected");
            }
            chart.toggle(&name);
        }
        chart
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Full surface height: legend strip plus chart area.
    pub fn height(&self) -> i32 {
        self.legend.height.ceil() as i32 + self.config.height
    }

    /// Y offset of the chart area inside the surface.
    pub fn chart_top(&self) -> f32 {
        self.legend.height.ceil()
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn date_keys(&self) -> &[f64] {
        &self.date_keys
    }

    /// Series indices in paint order; the last one is drawn on top.
    pub fn draw_order(&self) -> &[usize] {
        &self.draw_order
    }

    /// New container width: x range, legend wrapping and the hover hit follow.
    pub fn resize(&mut self, width: i32) {
        let width = width.max(self.config.insets.hsum() as i32 + 1);
        if width == self.width {
            return;
        }
        self.width = width;
        self.x.set_range(self.config.insets.left as f32, (width - self.config.insets.right as i32) as f32);
        self.relayout_legend();
        // Anchors were computed with the old range.
        self.hover.hit = None;
        debug!(width, "resized");
    }

    fn relayout_legend(&mut self) {
        let text = &self.text;
        self.legend = Legend::layout(self.dataset.series_names(), self.width as f32, |s| {
            text.measure_width(s, LEGEND_FONT_SIZE, false)
        });
    }

    /// Flip the highlight of `name`; returns the new flag.
    pub fn toggle(&mut self, name: &str) -> bool {
        let on = self.selection.toggle(name);
        // A deselected series can no longer own the tooltip.
        if let Some(hit) = self.hover.hit {
            if !self.selection.is_selected(&self.dataset.series[hit.series_index].name) {
                self.hover.hit = None;
            }
        }
        on
    }

    /// Legend click at surface coordinates; returns the toggled series name.
    pub fn click(&mut self, x: f32, y: f32) -> Option<String> {
        let index = self.legend.hit_test(x, y)?;
        let name = self.dataset.series[index].name.clone();
        self.toggle(&name);
        Some(name)
    }

    pub fn pointer_entered(&mut self) {
        self.hover.enter();
    }

    pub fn pointer_left(&mut self) {
        self.hover.leave();
    }

    /// Pointer at surface coordinates. Leaving the chart area (into the
    /// legend) acts as a pointer leave.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let top = self.chart_top();
        if y < top {
            if self.hover.pointer_inside {
                self.pointer_left();
            }
            return;
        }
        if !self.hover.pointer_inside {
            self.pointer_entered();
        }
        self.hover_at(x, y - top);
    }

    /// Hover lookup at chart-area coordinates. The pointer counts as inside.
    pub fn hover_at(&mut self, px: f32, py: f32) -> Option<HoverHit> {
        self.hover.enter();
        let hit = HoverContext {
            dataset: &self.dataset,
            date_keys: &self.date_keys,
            x: &self.x,
            y: &self.y,
            selection: &self.selection,
        }
        .locate(px, py);
        if let Some(h) = hit {
            self.raise(h.series_index);
        }
        self.hover.hit = hit;
        hit
    }

    /// Move `series_index` to the top of the draw order.
    pub fn raise(&mut self, series_index: usize) {
        if let Some(pos) = self.draw_order.iter().position(|&i| i == series_index) {
            let s = self.draw_order.remove(pos);
            self.draw_order.push(s);
        }
    }

    /// Line stroke: category color when selected, muted otherwise.
    pub fn stroke_color(&self, series_index: usize) -> skia::Color {
        let active = self.selection.is_selected(&self.dataset.series[series_index].name);
        self.config.palette.styled(series_index, active)
    }

    /// Legend swatches follow the same rule as lines.
    pub fn swatch_color(&self, series_index: usize) -> skia::Color {
        self.stroke_color(series_index)
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        if !self.hover.tooltip_visible() {
            return None;
        }
        let hit = self.hover.hit?;
        Some(Tooltip {
            series_index: hit.series_index,
            date_index: hit.date_index,
            anchor: hit.anchor,
            lines: tooltip_lines(&self.dataset, &hit, &self.config.tooltip_labels, &self.config.locale),
            color: self.config.palette.category(hit.series_index),
        })
    }
}
