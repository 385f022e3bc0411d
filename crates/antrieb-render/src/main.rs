// File: crates/antrieb-render/src/main.rs
// Summary: Loads the drive-type CSV, applies legend toggles and an optional pointer position,
//          and renders the chart to PNG (and optionally SVG).

use anyhow::{Context, Result};
use antrieb_core::{theme, Chart, ChartConfig, DataSource, RenderOptions, DEFAULT_DATA_URL, DEFAULT_SERIES};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Render the drive-type chart without a window.
#[derive(Parser, Debug)]
#[command(name = "antrieb-render")]
#[command(about = "Render the drive-type line chart to PNG/SVG")]
#[command(version)]
struct Args {
    /// CSV source: http(s) URL or local file path.
    #[arg(short, long, default_value = DEFAULT_DATA_URL)]
    source: String,

    /// Series highlighted on load.
    #[arg(long, default_value = DEFAULT_SERIES)]
    select: String,

    /// Start with nothing highlighted (ignores --select).
    #[arg(long)]
    no_default: bool,

    /// Additional legend clicks, applied in order.
    #[arg(long = "toggle")]
    toggles: Vec<String>,

    /// Surface width in pixels.
    #[arg(short, long, default_value_t = antrieb_core::types::WIDTH)]
    width: i32,

    /// Simulated pointer position "X,Y" in surface pixels.
    #[arg(long, value_parser = parse_point)]
    hover: Option<(f32, f32)>,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output PNG path.
    #[arg(short, long, default_value = "target/out/antrieb.png")]
    out: PathBuf,

    /// Also write an SVG next to the PNG.
    #[arg(long)]
    svg: bool,
}

fn parse_point(s: &str) -> std::result::Result<(f32, f32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad Y: {e}"))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let source = DataSource::parse(&args.source);
    let dataset = source.load().with_context(|| format!("failed to load dataset from {source}"))?;

    let config = ChartConfig {
        source,
        default_series: (!args.no_default).then(|| args.select.clone()),
        ..ChartConfig::default()
    };
    let mut chart = Chart::with_width(dataset, config, args.width);

    for name in &args.toggles {
        if chart.dataset.series_index(name).is_none() {
            warn!(series = %name, "toggled name is not a series in the dataset");
        }
        chart.toggle(name);
    }
    info!(selected = ?chart.selection.selected_names(), "selection");

    if let Some((x, y)) = args.hover {
        chart.pointer_moved(x, y);
        match chart.tooltip() {
            Some(tip) => info!(lines = ?tip.lines, "tooltip"),
            None => info!("no tooltip at pointer position"),
        }
    }

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    chart.render_to_png(&opts, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(path = %args.out.display(), width = chart.width(), height = chart.height(), "wrote PNG");

    if args.svg {
        let svg_path = args.out.with_extension("svg");
        chart.render_to_svg(&opts, &svg_path)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;
        info!(path = %svg_path.display(), "wrote SVG");
    }
    Ok(())
}
