//! Plot styling and figure export for lecture materials.
//!
//! `chalcedon` wraps [`plotly`]'s layout and static-export machinery with
//! the conventions used across our lecture notes: two presentation targets
//! ("web" and "slide"), each with its own color sheet and export format, a
//! fixed output tree under `images/`, and a handful of image-display
//! helpers for side-by-side figures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use chalcedon::{Config, DisplayMode, ExportOptions, Exporter, FigSize, Figure};
//!
//! let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));
//!
//! let mut figure = Figure::new();
//! figure.apply_style(DisplayMode::Web, Some(FigSize::Single));
//! figure.add_line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], "x²");
//! figure.apply_grid(DisplayMode::Web);
//!
//! // Writes images/Lecture1/quadratic.png (the directory must exist).
//! exporter.store_fig(&mut figure, "quadratic", ExportOptions::new())?;
//! # Ok::<(), chalcedon::Error>(())
//! ```
//!
//! # Display modes and sheets
//!
//! | Mode    | Sheet  | Theme                             | Extension |
//! |---------|--------|-----------------------------------|-----------|
//! | `web`   | `dusk` | dark background, light foreground | `png`     |
//! | `slide` | `dawn` | light background, dark foreground | `pdf`     |
//!
//! Styling by an unrecognized mode name is a documented no-op, reported as
//! [`StyleOutcome::Skipped`] rather than an error.
//!
//! # Output layout
//!
//! Exports land in `images/<save_path>/<fig_id>.<extension>` relative to
//! the working directory. The exporter never creates directories and never
//! checks for collisions: exporting the same identifier twice overwrites
//! the first file.

mod config;
mod display;
mod error;
mod export;
mod figure;
mod style;

pub use config::{Config, DisplayMode, FigSize};
pub use display::{
    bgr_to_rgb, compare_images, image_grid, printer, remove_borders, trim_spines, GridOptions,
    MAX_GRID_CELLS,
};
pub use error::Error;
pub use export::{ExportOptions, Exporter};
pub use figure::{Figure, StyleOutcome};
pub use style::{palette, GridSpec, StyleSheet};
