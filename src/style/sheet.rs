//! The two built-in style sheets.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::palette;
use crate::config::DisplayMode;

/// Grid line color and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSpec {
    pub color: &'static str,
    pub width: usize,
}

/// A fixed table of formatting options for one display mode.
///
/// Sheets are static data selected wholesale by mode; nothing in them is
/// computed at runtime and nothing mutates them. Applying a sheet rewrites a
/// figure's layout: backgrounds, fonts, the color cycle, legend, and
/// borderless grid-on axes.
///
/// Two sheets exist:
///
/// | Sheet  | Mode    | Character                          |
/// |--------|---------|------------------------------------|
/// | `dusk` | `web`   | dark background, light foreground  |
/// | `dawn` | `slide` | light background, dark foreground  |
#[derive(Debug, Clone, Serialize)]
pub struct StyleSheet {
    /// Sheet name, `"dusk"` or `"dawn"`.
    pub name: &'static str,
    /// Background of the figure margin area.
    pub paper_color: &'static str,
    /// Background of the plotting canvas.
    pub canvas_color: &'static str,
    /// Background substituted for the margin area when a figure is exported.
    pub export_color: &'static str,
    /// Color of axis labels and body text.
    pub label_color: &'static str,
    /// Color of tick marks and tick labels.
    pub tick_color: &'static str,
    /// Base grid drawn whenever the sheet is applied.
    pub grid: GridSpec,
    /// Emphasized grid drawn by [`Figure::apply_grid`](crate::Figure::apply_grid).
    pub grid_overlay: GridSpec,
    /// Legend background.
    pub legend_color: &'static str,
    /// Default trace line width.
    pub line_width: f64,
    /// Base font size.
    pub font_size: usize,
    /// Tick label font size.
    pub tick_font_size: usize,
    /// Whether axis border lines (spines) are drawn. Both sheets hide them.
    pub show_spines: bool,
    /// The trace color cycle.
    pub cycle: [&'static str; 7],
}

static DUSK: Lazy<StyleSheet> = Lazy::new(|| StyleSheet {
    name: "dusk",
    paper_color: "#838ba7",
    canvas_color: "#363a4f",
    export_color: "#363a4f",
    label_color: "#cad3f5",
    tick_color: "#cad3f5",
    grid: GridSpec {
        color: "#5b6078",
        width: 1,
    },
    grid_overlay: GridSpec {
        color: "#5b6078",
        width: 1,
    },
    legend_color: "#6c7086",
    line_width: 4.0,
    font_size: 16,
    tick_font_size: 10,
    show_spines: false,
    cycle: palette::CYCLE,
});

static DAWN: Lazy<StyleSheet> = Lazy::new(|| StyleSheet {
    name: "dawn",
    paper_color: "#fafafa",
    canvas_color: "#fafafa",
    export_color: "#fafafa",
    label_color: "#1e1e1e",
    tick_color: "#1e1e1e",
    grid: GridSpec {
        color: "#f0f0f0",
        width: 1,
    },
    grid_overlay: GridSpec {
        color: "#c8c8c8",
        width: 1,
    },
    legend_color: "#6c7086",
    line_width: 4.0,
    font_size: 12,
    tick_font_size: 10,
    show_spines: false,
    cycle: palette::CYCLE,
});

impl StyleSheet {
    /// The web sheet: dark background, light foreground.
    pub fn dusk() -> &'static StyleSheet {
        &DUSK
    }

    /// The slide sheet: light background, dark foreground.
    pub fn dawn() -> &'static StyleSheet {
        &DAWN
    }

    /// The sheet for a display mode. Total: every mode has a sheet.
    pub fn for_mode(mode: DisplayMode) -> &'static StyleSheet {
        match mode {
            DisplayMode::Web => Self::dusk(),
            DisplayMode::Slide => Self::dawn(),
        }
    }

    /// The sheet for a mode name, `None` for unrecognized names.
    ///
    /// This is the string boundary where the unknown-mode no-op lives:
    /// callers that get `None` apply nothing.
    pub fn for_name(name: &str) -> Option<&'static StyleSheet> {
        DisplayMode::from_name(name).map(Self::for_mode)
    }
}
