// File: crates/antrieb-window/src/main.rs
// Summary: Windowed chart via RGBA blit (CPU) using winit + softbuffer.
// Notes:
// - The dataset is fetched before the window exists; there is no loading state.
// - Pointer moves, clicks and resizes are handled synchronously, one redraw each.

use anyhow::{Context, Result};
use antrieb_core::{theme, Chart, ChartConfig, DataSource, RenderOptions, DEFAULT_DATA_URL, DEFAULT_SERIES};
use clap::Parser;
use std::num::NonZeroU32;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Interactive drive-type chart.
#[derive(Parser, Debug)]
#[command(name = "antrieb-window")]
#[command(about = "Show the drive-type line chart with hover tooltips and a clickable legend")]
#[command(version)]
struct Args {
    /// CSV source: http(s) URL or local file path.
    #[arg(short, long, default_value = DEFAULT_DATA_URL)]
    source: String,

    /// Series highlighted on load.
    #[arg(long, default_value = DEFAULT_SERIES)]
    select: String,

    /// Initial theme preset (light, dark); any key cycles presets.
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let source = DataSource::parse(&args.source);
    let dataset = source.load().with_context(|| format!("failed to load dataset from {source}"))?;
    let config = ChartConfig { source, default_series: Some(args.select.clone()), ..ChartConfig::default() };
    let mut chart = Chart::new(dataset, config);

    let presets = theme::presets();
    let mut theme_idx = presets.iter().position(|t| t.name.eq_ignore_ascii_case(&args.theme)).unwrap_or(0);

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Antrieb: Fahrzeuge nach Antriebsart")
        .with_inner_size(winit::dpi::PhysicalSize::new(chart.width() as u32, chart.height() as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    chart.resize(window.inner_size().width as i32);
    let mut cursor: Option<(f32, f32)> = None;
    info!(series = chart.dataset.series.len(), rows = chart.dataset.len(), "window ready");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    chart.resize(new_size.width as i32);
                    if let Some((x, y)) = cursor {
                        chart.pointer_moved(x, y);
                    }
                    // A wrapped legend pushes the axis down; grow to fit.
                    let need = chart.height() as u32;
                    if new_size.height < need {
                        window.set_inner_size(winit::dpi::PhysicalSize::new(new_size.width, need));
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let p = (position.x as f32, position.y as f32);
                    cursor = Some(p);
                    chart.pointer_moved(p.0, p.1);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    chart.pointer_left();
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        if let Some(name) = chart.click(x, y) {
                            debug!(series = %name, "legend click");
                            // Re-run the lookup so the tooltip reflects the new candidates.
                            chart.pointer_moved(x, y);
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    theme_idx = (theme_idx + 1) % presets.len();
                    info!(theme = presets[theme_idx].name, "theme switched");
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let opts = RenderOptions { theme: presets[theme_idx], ..RenderOptions::default() };
                let size = window.inner_size();
                if let Err(e) = present(&chart, &opts, &mut surface, size.width, size.height) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Render to RGBA and blit into the window buffer, clipping to the window and
/// filling any uncovered area with the theme background.
fn present(
    chart: &Chart,
    opts: &RenderOptions,
    surface: &mut softbuffer::Surface,
    win_w: u32,
    win_h: u32,
) -> Result<()> {
    let (Some(nw), Some(nh)) = (NonZeroU32::new(win_w), NonZeroU32::new(win_h)) else {
        return Ok(()); // minimized
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;

    let (rgba, w, h, stride) = chart.render_to_rgba8(opts)?;
    let bg = opts.theme.background;
    let bg_px = ((bg.r() as u32) << 16) | ((bg.g() as u32) << 8) | bg.b() as u32;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    let (win_w, win_h) = (win_w as usize, win_h as usize);
    for y in 0..win_h {
        for x in 0..win_w {
            frame[y * win_w + x] = if x < w as usize && y < h as usize {
                let i = y * stride + x * 4;
                ((rgba[i] as u32) << 16) | ((rgba[i + 1] as u32) << 8) | rgba[i + 2] as u32
            } else {
                bg_px
            };
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
