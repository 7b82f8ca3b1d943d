//! Figure wrapper: a plotly plot plus the styling entry points.

use plotly::common::{Font, Line, Mode};
use plotly::layout::{Axis, Legend, Margin, TicksDirection};
use plotly::{Layout, Plot, Scatter, Trace};
use tracing::{debug, warn};

use crate::config::{DisplayMode, FigSize};
use crate::style::{palette, StyleSheet};

/// Default canvas dimensions before any preset is applied.
const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 480;

/// What a named styling call did.
///
/// The unrecognized-mode no-op is a documented branch of the styling
/// contract, so it is reported explicitly instead of being folded into an
/// error or swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOutcome {
    /// A sheet was applied (and the figure resized, if a preset was given).
    Applied,
    /// Unknown mode name, but a size preset was given: resized only.
    Resized,
    /// Unknown mode name and no size preset: nothing changed.
    Skipped,
}

/// A figure under construction: traces, working layout, and dimensions.
///
/// `Figure` owns a [`plotly::Plot`] and keeps the layout it pushes into it,
/// so styling calls compose: applying a sheet, then a grid, then tight
/// margins each refine the same layout.
///
/// # Example
///
/// ```rust
/// use chalcedon::{DisplayMode, FigSize, Figure};
///
/// let mut figure = Figure::new();
/// figure.add_line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], "x²");
/// figure.apply_style(DisplayMode::Web, Some(FigSize::Single));
/// figure.apply_grid(DisplayMode::Web);
/// assert_eq!(figure.dimensions(), (1000, 600));
/// ```
pub struct Figure {
    plot: Plot,
    layout: Layout,
    sheet: Option<&'static StyleSheet>,
    trace_count: usize,
    width: usize,
    height: usize,
}

impl Figure {
    /// Creates an empty figure at the default dimensions.
    pub fn new() -> Self {
        Self {
            plot: Plot::new(),
            layout: Layout::new(),
            sheet: None,
            trace_count: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Creates an empty figure sized to a preset.
    pub fn with_size(size: FigSize) -> Self {
        let mut figure = Self::new();
        figure.resize(size);
        figure
    }

    /// Adds any plotly trace.
    pub fn add_trace(&mut self, trace: Box<dyn Trace>) {
        self.plot.add_trace(trace);
        self.trace_count += 1;
    }

    /// Adds a line trace styled by the active sheet: the next cycle color
    /// and the sheet's line width.
    pub fn add_line(&mut self, x: Vec<f64>, y: Vec<f64>, label: &str) {
        let color = palette::color(self.trace_count);
        let width = self.sheet.map_or(2.0, |sheet| sheet.line_width);
        let trace = Scatter::new(x, y)
            .mode(Mode::Lines)
            .name(label)
            .line(Line::new().color(color).width(width));
        self.add_trace(trace);
    }

    /// Applies the sheet for `mode` and, if given, a size preset.
    pub fn apply_style(&mut self, mode: DisplayMode, size: Option<FigSize>) {
        self.apply_sheet(StyleSheet::for_mode(mode), size);
    }

    /// Applies styling by mode name, preserving the unknown-name no-op.
    ///
    /// `"web"` and `"slide"` behave like [`Figure::apply_style`]. Any other
    /// name applies no styling: with a size preset the figure is still
    /// resized ([`StyleOutcome::Resized`]), without one nothing happens at
    /// all ([`StyleOutcome::Skipped`]).
    pub fn apply_style_named(&mut self, name: &str, size: Option<FigSize>) -> StyleOutcome {
        match StyleSheet::for_name(name) {
            Some(sheet) => {
                self.apply_sheet(sheet, size);
                StyleOutcome::Applied
            }
            None => match size {
                Some(size) => {
                    warn!(mode = name, "unknown display mode, resizing only");
                    self.resize(size);
                    StyleOutcome::Resized
                }
                None => {
                    warn!(mode = name, "unknown display mode, styling skipped");
                    StyleOutcome::Skipped
                }
            },
        }
    }

    /// Draws the emphasized grid for `mode` on both axes and turns tick
    /// marks on.
    ///
    /// plotly's cartesian axes render a single grid layer, so the overlay
    /// replaces the sheet's base grid color and width rather than stacking
    /// a second set of lines.
    pub fn apply_grid(&mut self, mode: DisplayMode) {
        let sheet = StyleSheet::for_mode(mode);
        let axis = base_axis(sheet)
            .grid_color(sheet.grid_overlay.color)
            .grid_width(sheet.grid_overlay.width)
            .ticks(TicksDirection::Outside);
        self.layout = self.layout.clone().x_axis(axis.clone()).y_axis(axis);
        self.push();
    }

    /// Compacts the figure margins before export.
    pub fn tight_layout(&mut self) {
        self.layout = self
            .layout
            .clone()
            .margin(Margin::new().left(48).right(24).top(32).bottom(48));
        self.push();
    }

    /// Resizes to a preset without touching styling.
    pub fn resize(&mut self, size: FigSize) {
        let (width, height) = size.dimensions();
        self.width = width;
        self.height = height;
        self.layout = self.layout.clone().width(width).height(height);
        self.push();
    }

    /// Resets to a fresh canvas: no traces, default layout and dimensions.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The underlying plot.
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Consumes the figure, returning the underlying plot.
    pub fn into_plot(self) -> Plot {
        self.plot
    }

    /// The working layout, as last pushed into the plot.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Current `(width, height)` in pixels.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of traces added so far.
    pub fn trace_count(&self) -> usize {
        self.trace_count
    }

    fn apply_sheet(&mut self, sheet: &'static StyleSheet, size: Option<FigSize>) {
        debug!(sheet = sheet.name, "applying style sheet");
        self.sheet = Some(sheet);
        self.layout = self
            .layout
            .clone()
            .paper_background_color(sheet.paper_color)
            .plot_background_color(sheet.canvas_color)
            .font(Font::new().size(sheet.font_size).color(sheet.label_color))
            .colorway(sheet.cycle.to_vec())
            .legend(Legend::new().background_color(sheet.legend_color))
            .x_axis(base_axis(sheet))
            .y_axis(base_axis(sheet));
        self.push();
        if let Some(size) = size {
            self.resize(size);
        }
    }

    /// Replaces the working layout wholesale. Used by the display helpers,
    /// which assemble subplot-grid layouts of their own.
    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.push();
    }

    pub(crate) fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Swaps the margin background for the sheet's export background.
    pub(crate) fn apply_export_background(&mut self, mode: DisplayMode) {
        let sheet = StyleSheet::for_mode(mode);
        self.layout = self.layout.clone().paper_background_color(sheet.export_color);
        self.push();
    }

    /// Writes the figure through the Kaleido engine.
    pub(crate) fn write_to(&self, path: &std::path::Path, format: plotly::ImageFormat, scale: f64) {
        self.plot
            .write_image(path, format, self.width, self.height, scale);
    }

    fn push(&mut self) {
        self.plot.set_layout(self.layout.clone());
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("plot", &"..")
            .field("sheet", &self.sheet.map(|sheet| sheet.name))
            .field("trace_count", &self.trace_count)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// The sheet's borderless, grid-on axis.
fn base_axis(sheet: &StyleSheet) -> Axis {
    Axis::new()
        .show_line(sheet.show_spines)
        .zero_line(false)
        .show_grid(true)
        .grid_color(sheet.grid.color)
        .grid_width(sheet.grid.width)
        .tick_color(sheet.tick_color)
        .tick_font(
            Font::new()
                .size(sheet.tick_font_size)
                .color(sheet.tick_color),
        )
}
