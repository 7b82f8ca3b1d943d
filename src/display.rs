//! Image display helpers: subplot grids, border stripping, channel-order
//! conversion, and side-by-side comparison.
//!
//! These helpers are stateless. They build on the same figure type the
//! styling layer uses but carry no configuration of their own; everything is
//! passed per call.

use std::path::PathBuf;

use image::{DynamicImage, RgbImage};
use plotly::color::Rgb;
use plotly::common::{Anchor, ColorScale, ColorScalePalette, Font};
use plotly::layout::{Annotation, Axis, GridPattern, LayoutGrid, Margin};
use plotly::traces::image::ColorModel;
use plotly::{HeatMap, ImageFormat, Layout, Trace};
use tracing::debug;

use crate::error::Error;
use crate::figure::Figure;

/// Upper bound on grid cells: the layout addresses at most eight axis pairs.
pub const MAX_GRID_CELLS: usize = 8;

/// Pixel edge of one grid cell.
const CELL_SIZE: usize = 300;

/// Grid color used by [`remove_borders`].
const FAINT_GRID_COLOR: &str = "#dddddd";

/// Options for [`image_grid`].
///
/// # Example
///
/// ```rust
/// use chalcedon::GridOptions;
///
/// let opts = GridOptions::new()
///     .titles(["input", "edges", "threshold", "result"])
///     .bgr(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    titles: Option<Vec<String>>,
    bgr: bool,
    color_maps: Option<Vec<ColorScalePalette>>,
    publish: Option<String>,
    show: bool,
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit cell labels, replacing the alphabetic "(a)", "(b)", …
    /// defaults. Must supply at least one label per cell.
    pub fn titles(mut self, titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.titles = Some(titles.into_iter().map(Into::into).collect());
        self
    }

    /// Treat the input images as BGR-ordered and swap channels for display.
    pub fn bgr(mut self, bgr: bool) -> Self {
        self.bgr = bgr;
        self
    }

    /// Per-image color scales. When set, each image is displayed as a
    /// single-channel map through its scale instead of as RGB data.
    pub fn color_maps(mut self, color_maps: impl IntoIterator<Item = ColorScalePalette>) -> Self {
        self.color_maps = Some(color_maps.into_iter().collect());
        self
    }

    /// File stem to publish the grid to (`<publish>.png`).
    pub fn publish(mut self, publish: impl Into<String>) -> Self {
        self.publish = Some(publish.into());
        self
    }

    /// Open the grid in the default browser after building it.
    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }
}

/// Lays out `rows × columns` images in a shared-style subplot grid.
///
/// Every cell is borderless with ticks and tick labels hidden. Cells are
/// labeled alphabetically in row-major order unless `opts` supplies titles;
/// first-row labels sit above the cell, all others below it. The show/publish
/// tail is delegated to [`printer`].
///
/// # Errors
///
/// - [`Error::GridTooLarge`] for more than [`MAX_GRID_CELLS`] cells
/// - [`Error::LengthMismatch`] when `images`, `titles`, or `color_maps`
///   are shorter than the grid (extra images beyond the grid are ignored)
pub fn image_grid(
    rows: usize,
    columns: usize,
    images: &[DynamicImage],
    opts: &GridOptions,
) -> Result<Figure, Error> {
    let cells = rows * columns;
    if cells > MAX_GRID_CELLS {
        return Err(Error::GridTooLarge {
            cells,
            max: MAX_GRID_CELLS,
        });
    }
    if images.len() < cells {
        return Err(Error::LengthMismatch {
            what: "images",
            expected: cells,
            actual: images.len(),
        });
    }
    if let Some(titles) = &opts.titles {
        if titles.len() < cells {
            return Err(Error::LengthMismatch {
                what: "titles",
                expected: cells,
                actual: titles.len(),
            });
        }
    }
    if let Some(color_maps) = &opts.color_maps {
        if color_maps.len() < cells {
            return Err(Error::LengthMismatch {
                what: "color maps",
                expected: cells,
                actual: color_maps.len(),
            });
        }
    }

    let width = columns * CELL_SIZE;
    let height = rows * CELL_SIZE;
    let mut figure = Figure::new();
    let mut layout = Layout::new()
        .grid(
            LayoutGrid::new()
                .rows(rows)
                .columns(columns)
                .pattern(GridPattern::Independent),
        )
        .width(width)
        .height(height)
        .margin(Margin::new().left(20).right(20).top(40).bottom(40));

    let mut annotations = Vec::with_capacity(cells);
    for index in 0..cells {
        match &opts.color_maps {
            Some(color_maps) => {
                figure.add_trace(heatmap_cell(&images[index], color_maps[index].clone(), index));
            }
            None => figure.add_trace(rgb_cell(&images[index], opts.bgr, index)),
        }
        layout = with_cell_axes(layout, index);
        annotations.push(cell_label(index, columns, opts.titles.as_deref()));
    }
    layout = layout.annotations(annotations);
    figure.set_layout(layout);
    figure.set_dimensions(width, height);

    printer(&figure, opts.show, opts.publish.as_deref())?;
    Ok(figure)
}

/// Publish and/or show a finished figure.
///
/// With `publish`, writes `<publish>.png` at triple scale; with `show`,
/// opens the figure in the default browser. Both may fire.
///
/// # Errors
///
/// Returns [`Error::ExportFailed`] if publishing produced no file.
pub fn printer(figure: &Figure, show: bool, publish: Option<&str>) -> Result<(), Error> {
    if let Some(stem) = publish {
        let path = PathBuf::from(format!("{stem}.png"));
        debug!(path = %path.display(), "publishing figure");
        figure.write_to(&path, ImageFormat::PNG, 3.0);
        if !path.is_file() {
            return Err(Error::ExportFailed(path));
        }
    }
    if show {
        figure.plot().show();
    }
    Ok(())
}

/// Strips an axis down to bare image framing: no border line, no zero line,
/// no ticks or tick labels, a faint grid. Idempotent.
pub fn remove_borders(axis: Axis) -> Axis {
    axis.show_line(false)
        .zero_line(false)
        .tick_length(0)
        .show_tick_labels(false)
        .show_grid(true)
        .grid_color(FAINT_GRID_COLOR)
        .grid_width(1)
}

/// Hides the top/right border (the mirror line) and widens tick marks, for
/// ordinary line plots rather than images.
pub fn trim_spines(axis: Axis) -> Axis {
    axis.show_line(true).mirror(false).tick_length(5).tick_width(2)
}

/// Swaps the first and third channel of every pixel, converting a
/// BGR-ordered image to RGB (and back, since the swap is its own inverse).
///
/// # Example
///
/// ```rust
/// use chalcedon::bgr_to_rgb;
/// use image::{Rgb, RgbImage};
///
/// let bgr = RgbImage::from_pixel(1, 1, Rgb([10, 20, 30]));
/// let rgb = bgr_to_rgb(&bgr);
/// assert_eq!(rgb.get_pixel(0, 0).0, [30, 20, 10]);
/// ```
pub fn bgr_to_rgb(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0.swap(0, 2);
    }
    out
}

/// Shows an original and an altered image side by side for visual
/// inspection, blocking on the browser display.
///
/// # Errors
///
/// Propagates [`image_grid`] errors.
pub fn compare_images(original: &DynamicImage, altered: &DynamicImage) -> Result<(), Error> {
    let opts = GridOptions::new()
        .titles(["Original Image", "Output Image"])
        .show(true);
    image_grid(1, 2, &[original.clone(), altered.clone()], &opts)?;
    Ok(())
}

/// Axis reference names for the `index`-th grid cell.
fn axis_ref(index: usize) -> (String, String) {
    if index == 0 {
        ("x".to_string(), "y".to_string())
    } else {
        (format!("x{}", index + 1), format!("y{}", index + 1))
    }
}

/// Registers the borderless axis pair for one cell on the layout.
fn with_cell_axes(layout: Layout, index: usize) -> Layout {
    let x = remove_borders(Axis::new());
    let y = remove_borders(Axis::new());
    match index {
        0 => layout.x_axis(x).y_axis(y),
        1 => layout.x_axis2(x).y_axis2(y),
        2 => layout.x_axis3(x).y_axis3(y),
        3 => layout.x_axis4(x).y_axis4(y),
        4 => layout.x_axis5(x).y_axis5(y),
        5 => layout.x_axis6(x).y_axis6(y),
        6 => layout.x_axis7(x).y_axis7(y),
        7 => layout.x_axis8(x).y_axis8(y),
        _ => unreachable!("cell count is capped at {MAX_GRID_CELLS}"),
    }
}

/// An RGB image cell, optionally channel-swapped from BGR input.
fn rgb_cell(image: &DynamicImage, bgr: bool, index: usize) -> Box<dyn Trace> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut z = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let p = rgb.get_pixel(x, y).0;
            row.push(if bgr {
                Rgb::new(p[2], p[1], p[0])
            } else {
                Rgb::new(p[0], p[1], p[2])
            });
        }
        z.push(row);
    }
    let (xref, yref) = axis_ref(index);
    plotly::Image::new(z)
        .color_model(ColorModel::RGB)
        .x_axis(xref.as_str())
        .y_axis(yref.as_str())
}

/// A single-channel cell displayed through a color scale.
///
/// Rows are reversed because heatmaps draw the first row at the bottom,
/// while image data puts it at the top.
fn heatmap_cell(image: &DynamicImage, color_map: ColorScalePalette, index: usize) -> Box<dyn Trace> {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    let mut z = Vec::with_capacity(height as usize);
    for y in (0..height).rev() {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            row.push(f64::from(gray.get_pixel(x, y).0[0]));
        }
        z.push(row);
    }
    let (xref, yref) = axis_ref(index);
    HeatMap::new_z(z)
        .color_scale(ColorScale::Palette(color_map))
        .show_scale(false)
        .x_axis(xref.as_str())
        .y_axis(yref.as_str())
}

/// The label annotation for one cell: above the cell on the first row,
/// below it on every other row.
fn cell_label(index: usize, columns: usize, titles: Option<&[String]>) -> Annotation {
    let text = match titles {
        Some(titles) => titles[index].clone(),
        None => format!("({})", char::from(b'a' + index as u8)),
    };
    let (xref, yref) = axis_ref(index);
    let top_row = index < columns;
    Annotation::new()
        .text(text.as_str())
        .x_ref(format!("{xref} domain").as_str())
        .y_ref(format!("{yref} domain").as_str())
        .x(0.5)
        .y(if top_row { 1.08 } else { -0.12 })
        .x_anchor(Anchor::Center)
        .y_anchor(if top_row { Anchor::Bottom } else { Anchor::Top })
        .show_arrow(false)
        .font(Font::new().size(12))
}
