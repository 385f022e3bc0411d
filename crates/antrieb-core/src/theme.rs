// File: crates/antrieb-core/src/theme.rs
// Summary: Light/Dark theming plus the categorical series palette.

use skia_safe as skia;

/// Categorical colors assigned to series in header order, cycling.
pub const CATEGORY_COLORS: [u32; 6] = [0x418AA1, 0x5AB08D, 0xE6DB78, 0xF4B184, 0xF3A79F, 0xA594AF];
/// Stroke/fill for series that are not selected.
pub const MUTED_COLOR: u32 = 0xEEEEEE;

pub fn rgb(hex: u32) -> skia::Color {
    skia::Color::from_argb(255, ((hex >> 16) & 0xff) as u8, ((hex >> 8) & 0xff) as u8, (hex & 0xff) as u8)
}

/// Parse `#RRGGBB` / `RRGGBB`.
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }
    u32::from_str_radix(s, 16).ok().map(rgb)
}

/// Ordinal color scale over series names; the nth series gets the nth color.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub colors: Vec<skia::Color>,
    pub muted: skia::Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: CATEGORY_COLORS.iter().map(|&c| rgb(c)).collect(), muted: rgb(MUTED_COLOR) }
    }
}

impl Palette {
    pub fn category(&self, series_index: usize) -> skia::Color {
        if self.colors.is_empty() {
            return self.muted;
        }
        self.colors[series_index % self.colors.len()]
    }

    /// Category color when `active`, muted otherwise.
    pub fn styled(&self, series_index: usize, active: bool) -> skia::Color {
        if active { self.category(series_index) } else { self.muted }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_text: skia::Color,
    pub callout_fill: skia::Color,
    pub callout_text: skia::Color,
    /// How series strokes combine with what is underneath. Multiply only
    /// reads on a light background.
    pub line_blend: skia::BlendMode,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
            // white at 0.85 opacity
            callout_fill: skia::Color::from_argb(217, 255, 255, 255),
            callout_text: skia::Color::from_argb(255, 0, 0, 0),
            line_blend: skia::BlendMode::Multiply,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            callout_fill: skia::Color::from_argb(217, 30, 30, 34),
            callout_text: skia::Color::from_argb(255, 235, 235, 245),
            line_blend: skia::BlendMode::SrcOver,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_default()
}
