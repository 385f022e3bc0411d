// File: crates/antrieb-core/src/render.rs
// Summary: Skia rendering of the chart scene and headless outputs (PNG, RGBA8, SVG).

use skia_safe as skia;
use tracing::debug;

use crate::axis::{bottom_ticks, left_ticks, TICK_PADDING, TICK_SIZE};
use crate::chart::{Chart, Tooltip, LEGEND_FONT_SIZE};
use crate::error::{ChartError, Result};
use crate::scale::ScaleTransform;
use crate::theme::Theme;

const AXIS_FONT_SIZE: f32 = 10.0;
const CALLOUT_FONT_SIZE: f32 = 12.0;
const LINE_WIDTH: f32 = 2.0;
const DOT_RADIUS: f32 = 3.5;

pub struct RenderOptions {
    pub theme: Theme,
    /// Off for pixel-exact snapshots (font availability differs per machine).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }
}

impl Chart {
    /// Paint the whole scene: legend, axes, lines, hover dot and callout.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        self.draw_legend(canvas, opts);

        canvas.save();
        canvas.translate((0.0, self.chart_top()));
        self.draw_axes(canvas, opts);
        self.draw_lines(canvas, opts);
        if self.hover.dot_visible() {
            if let Some(hit) = self.hover.hit {
                let mut dot = skia::Paint::default();
                dot.set_anti_alias(true);
                dot.set_color(self.config.palette.category(hit.series_index));
                canvas.draw_circle(hit.anchor, DOT_RADIUS, &dot);
            }
        }
        if let Some(tip) = self.tooltip() {
            self.draw_callout(canvas, &tip, opts);
        }
        canvas.restore();
    }

    fn draw_legend(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        for e in &self.legend().entries {
            fill.set_color(self.swatch_color(e.series_index));
            let s = e.swatch;
            canvas.draw_rect(skia::Rect::from_ltrb(s.left, s.top, s.right, s.bottom), &fill);
            if opts.draw_labels {
                let (lx, ly) = e.label_origin;
                self.text.draw_left(canvas, &e.name, lx, ly, LEGEND_FONT_SIZE, opts.theme.legend_text, false);
            }
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let insets = self.config.insets;
        let bottom = (self.config.height - insets.bottom as i32) as f32;
        let left = insets.left as f32;

        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(1.0);
        line.set_color(opts.theme.axis_line);

        // Bottom axis: domain line without outer ticks.
        let (x0, x1) = self.x.range();
        canvas.draw_line((x0, bottom), (x1, bottom), &line);
        line.set_color(opts.theme.tick);
        for t in bottom_ticks(&self.x, self.config.tick_count) {
            canvas.draw_line((t.pos, bottom), (t.pos, bottom + TICK_SIZE), &line);
            if opts.draw_labels {
                let baseline = bottom + TICK_SIZE + TICK_PADDING + AXIS_FONT_SIZE;
                self.text.draw_centered(canvas, &t.label, t.pos, baseline, AXIS_FONT_SIZE, opts.theme.axis_label);
            }
        }

        // Left axis: domain line with outer ticks at both ends.
        let (y0, y1) = (self.y.r0, self.y.r1);
        line.set_color(opts.theme.axis_line);
        let mut domain = skia::Path::new();
        domain.move_to((left - TICK_SIZE, y0));
        domain.line_to((left, y0));
        domain.line_to((left, y1));
        domain.line_to((left - TICK_SIZE, y1));
        canvas.draw_path(&domain, &line);

        line.set_color(opts.theme.tick);
        let ticks = left_ticks(&self.y, self.config.tick_count, &self.config.locale);
        for t in &ticks {
            canvas.draw_line((left - TICK_SIZE, t.pos), (left, t.pos), &line);
            if opts.draw_labels {
                let baseline = t.pos + AXIS_FONT_SIZE * 0.32;
                self.text.draw_right(canvas, &t.label, left - TICK_SIZE - TICK_PADDING, baseline, AXIS_FONT_SIZE, opts.theme.axis_label);
            }
        }
        // Axis title beside the topmost tick, in bold.
        if opts.draw_labels {
            if let Some(top) = ticks.iter().min_by(|a, b| a.pos.total_cmp(&b.pos)) {
                let baseline = top.pos + AXIS_FONT_SIZE * 0.32;
                self.text.draw_left(canvas, &self.config.y_label, left + 5.0, baseline, AXIS_FONT_SIZE, opts.theme.axis_label, true);
            }
        }
    }

    fn draw_lines(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_blend_mode(opts.theme.line_blend);

        let keys = self.date_keys();
        for &si in self.draw_order() {
            let series = &self.dataset.series[si];
            let mut path = skia::Path::new();
            for (start, run) in series.segments() {
                for (k, v) in run.iter().enumerate() {
                    let p = (self.x.to_px(keys[start + k]), self.y.to_px(*v));
                    if k == 0 {
                        path.move_to(p);
                        // Lone points still leave a round-capped dot.
                        if run.len() == 1 {
                            path.line_to(p);
                        }
                    } else {
                        path.line_to(p);
                    }
                }
            }
            stroke.set_color(self.stroke_color(si));
            canvas.draw_path(&path, &stroke);
        }
    }

    fn draw_callout(&self, canvas: &skia::Canvas, tip: &Tooltip, opts: &RenderOptions) {
        let line_h = CALLOUT_FONT_SIZE * 1.5;
        let w = if opts.draw_labels {
            tip.lines.iter().map(|l| self.text.measure_width(l, CALLOUT_FONT_SIZE, false)).fold(0.0f32, f32::max)
        } else {
            0.0
        };
        let h = line_h * (tip.lines.len().max(1) as f32 - 1.0) + CALLOUT_FONT_SIZE;

        canvas.save();
        canvas.translate(tip.anchor);

        // Box below the anchor with a small pointer notch.
        let mut shape = skia::Path::new();
        shape.move_to((-w / 2.0 - 10.0, 5.0));
        shape.line_to((-5.0, 5.0));
        shape.line_to((0.0, 0.0));
        shape.line_to((5.0, 5.0));
        shape.line_to((w / 2.0 + 10.0, 5.0));
        shape.line_to((w / 2.0 + 10.0, h + 25.0));
        shape.line_to((-w / 2.0 - 10.0, h + 25.0));
        shape.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(opts.theme.callout_fill);
        canvas.draw_path(&shape, &fill);

        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(1.5);
        outline.set_color(tip.color);
        canvas.draw_path(&shape, &outline);

        if opts.draw_labels {
            for (i, text) in tip.lines.iter().enumerate() {
                let baseline = 15.0 + CALLOUT_FONT_SIZE + i as f32 * line_h;
                self.text.draw_left(canvas, text, -w / 2.0, baseline, CALLOUT_FONT_SIZE, opts.theme.callout_text, false);
            }
        }
        canvas.restore();
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = (self.width(), self.height());
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface { width: w, height: h })?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_creating_parent(output_png_path.as_ref(), &bytes)
    }

    /// Unpremultiplied RGBA8 pixels as `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(opts)?;
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Encode("RGBA8"));
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Vec<u8> {
        let bounds = skia::Rect::from_wh(self.width() as f32, self.height() as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        canvas.end().as_bytes().to_vec()
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts);
        write_creating_parent(output_svg_path.as_ref(), &bytes)
    }
}

fn write_creating_parent(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
