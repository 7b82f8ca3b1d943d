//! Figure export: path resolution, extension forcing, and the static write.

use std::path::{Path, PathBuf};

use plotly::ImageFormat;
use tracing::debug;

use crate::config::{Config, DisplayMode};
use crate::error::Error;
use crate::figure::Figure;

/// Root directory all exports land under, relative to the working directory.
const IMAGES_DIR: &str = "images";

/// Options for a single export.
///
/// A fluent builder over the export knobs. The defaults match the common
/// case: tight margins, resolution 400, extension chosen by the configured
/// display mode, no restyling, figure kept open.
///
/// # Example
///
/// ```rust
/// use chalcedon::ExportOptions;
///
/// let opts = ExportOptions::new()
///     .style("slide")
///     .resolution(200)
///     .close(true);
/// ```
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub(crate) tight_layout: bool,
    pub(crate) extension: Option<String>,
    pub(crate) resolution: u32,
    pub(crate) style: Option<String>,
    pub(crate) close: bool,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to compact the figure margins before writing. Default `true`.
    pub fn tight_layout(mut self, tight_layout: bool) -> Self {
        self.tight_layout = tight_layout;
        self
    }

    /// Explicit file extension, overriding the configured mode's choice.
    ///
    /// Ignored when [`ExportOptions::style`] names a mode; a mode always
    /// brings its own extension.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Output resolution. Scales the written pixel dimensions by
    /// `resolution / 100`. Default `400`.
    pub fn resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Re-applies a mode's sheet and grid right before writing and forces
    /// that mode's extension (`"web"` → png, `"slide"` → pdf).
    ///
    /// Any other name leaves both the styling and the extension choice
    /// alone, matching the unknown-mode no-op elsewhere.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Clears the figure after a successful write, so subsequent plotting
    /// starts on a fresh canvas. Default `false`.
    pub fn close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            tight_layout: true,
            extension: None,
            resolution: 400,
            style: None,
            close: false,
        }
    }
}

/// Writes figures to `images/<save_path>/<fig_id>.<extension>`.
///
/// The exporter owns its [`Config`]; it cannot exist without one, so there
/// is no "export before initialization" failure mode. It never creates
/// directories: `images/<save_path>/` must exist before the first export.
///
/// # Example
///
/// ```rust,no_run
/// use chalcedon::{Config, DisplayMode, ExportOptions, Exporter, Figure};
///
/// let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));
/// let mut figure = Figure::new();
/// figure.add_line(vec![0.0, 1.0], vec![0.0, 1.0], "identity");
/// // Writes images/Lecture1/fig1.png
/// let path = exporter.store_fig(&mut figure, "fig1", ExportOptions::new())?;
/// # Ok::<(), chalcedon::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Exporter {
    config: Config,
}

impl Exporter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The path an export with these options would write to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedExtension`] if the resolved extension has
    /// no export format.
    pub fn resolve_path(&self, fig_id: &str, opts: &ExportOptions) -> Result<PathBuf, Error> {
        let extension = self.resolve_extension(opts);
        format_for(&extension)?;
        Ok(self.output_dir().join(format!("{fig_id}.{extension}")))
    }

    /// Writes `figure` to `images/<save_path>/<fig_id>.<extension>` and
    /// returns the written path.
    ///
    /// Layout tightening and any `style` restyling are applied to the figure
    /// first, in that order, exactly as they will appear in the file.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedExtension`] for an extension with no format
    /// - [`Error::MissingOutputDir`] if `images/<save_path>/` does not exist
    /// - [`Error::ExportFailed`] if the export engine produced no file
    pub fn store_fig(
        &self,
        figure: &mut Figure,
        fig_id: &str,
        opts: ExportOptions,
    ) -> Result<PathBuf, Error> {
        if opts.tight_layout {
            figure.tight_layout();
        }
        let forced = opts.style.as_deref().and_then(DisplayMode::from_name);
        if let Some(mode) = forced {
            figure.apply_style(mode, None);
            figure.apply_grid(mode);
            figure.apply_export_background(mode);
        }

        let extension = self.resolve_extension(&opts);
        let format = format_for(&extension)?;
        let dir = self.output_dir();
        if !dir.is_dir() {
            return Err(Error::MissingOutputDir(dir));
        }

        let path = dir.join(format!("{fig_id}.{extension}"));
        let scale = f64::from(opts.resolution) / 100.0;
        debug!(path = %path.display(), scale, "writing figure");
        figure.write_to(&path, format, scale);
        if !path.is_file() {
            return Err(Error::ExportFailed(path));
        }

        if opts.close {
            figure.clear();
        }
        Ok(path)
    }

    fn output_dir(&self) -> PathBuf {
        Path::new(IMAGES_DIR).join(self.config.save_path())
    }

    /// Extension precedence: a mode named in `style` wins, then an explicit
    /// extension, then the configured mode's extension.
    fn resolve_extension(&self, opts: &ExportOptions) -> String {
        let forced = opts.style.as_deref().and_then(DisplayMode::from_name);
        match (forced, &opts.extension) {
            (Some(mode), _) => mode.extension().to_string(),
            (None, Some(extension)) => extension.clone(),
            (None, None) => self.config.mode().extension().to_string(),
        }
    }
}

fn format_for(extension: &str) -> Result<ImageFormat, Error> {
    match extension {
        "png" => Ok(ImageFormat::PNG),
        "jpeg" | "jpg" => Ok(ImageFormat::JPEG),
        "webp" => Ok(ImageFormat::WEBP),
        "svg" => Ok(ImageFormat::SVG),
        "pdf" => Ok(ImageFormat::PDF),
        "eps" => Ok(ImageFormat::EPS),
        other => Err(Error::UnsupportedExtension(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exporter(mode: DisplayMode) -> Exporter {
        Exporter::new(Config::new("Lecture1", mode))
    }

    #[test]
    fn test_resolve_path_web_defaults_to_png() {
        let path = exporter(DisplayMode::Web)
            .resolve_path("fig1", &ExportOptions::new())
            .unwrap();
        assert_eq!(path, Path::new("images/Lecture1/fig1.png"));
    }

    #[test]
    fn test_resolve_path_slide_defaults_to_pdf() {
        let path = exporter(DisplayMode::Slide)
            .resolve_path("fig1", &ExportOptions::new())
            .unwrap();
        assert_eq!(path, Path::new("images/Lecture1/fig1.pdf"));
    }

    #[test]
    fn test_style_forces_extension() {
        let opts = ExportOptions::new().style("slide").extension("png");
        let path = exporter(DisplayMode::Web)
            .resolve_path("test", &opts)
            .unwrap();
        assert!(path.to_str().unwrap().ends_with("test.pdf"));

        let opts = ExportOptions::new().style("web").extension("svg");
        let path = exporter(DisplayMode::Slide)
            .resolve_path("test", &opts)
            .unwrap();
        assert!(path.to_str().unwrap().ends_with("test.png"));
    }

    #[test]
    fn test_unknown_style_leaves_extension_alone() {
        let opts = ExportOptions::new().style("beamer").extension("svg");
        let path = exporter(DisplayMode::Web)
            .resolve_path("test", &opts)
            .unwrap();
        assert!(path.to_str().unwrap().ends_with("test.svg"));
    }

    #[test]
    fn test_explicit_extension_beats_mode() {
        let opts = ExportOptions::new().extension("jpeg");
        let path = exporter(DisplayMode::Slide)
            .resolve_path("test", &opts)
            .unwrap();
        assert!(path.to_str().unwrap().ends_with("test.jpeg"));
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let opts = ExportOptions::new().extension("tiff");
        let err = exporter(DisplayMode::Web)
            .resolve_path("test", &opts)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(ext) if ext == "tiff"));
    }

    #[test]
    fn test_options_defaults() {
        let opts = ExportOptions::default();
        assert!(opts.tight_layout);
        assert_eq!(opts.resolution, 400);
        assert!(opts.extension.is_none());
        assert!(opts.style.is_none());
        assert!(!opts.close);
    }
}
