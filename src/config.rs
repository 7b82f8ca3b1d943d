//! Presentation configuration: display mode, layout presets, and the
//! exporter's configuration value.

use serde::{Deserialize, Serialize};

/// The presentation target a figure is styled and exported for.
///
/// The mode selects both the color theme (the "dusk" sheet for web, the
/// "dawn" sheet for slides) and the file extension used on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Dark background, light foreground; exports as PNG.
    Web,
    /// Light background, dark foreground; exports as PDF.
    Slide,
}

impl DisplayMode {
    /// Parses a mode name, returning `None` for anything other than
    /// `"web"` or `"slide"`.
    ///
    /// Callers treat `None` as "apply nothing"; the unrecognized-mode
    /// no-op is part of the styling contract, not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "web" => Some(DisplayMode::Web),
            "slide" => Some(DisplayMode::Slide),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Web => "web",
            DisplayMode::Slide => "slide",
        }
    }

    /// The file extension forced on export for this mode.
    pub fn extension(&self) -> &'static str {
        match self {
            DisplayMode::Web => "png",
            DisplayMode::Slide => "pdf",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Figure layout presets.
///
/// A small enumerated set rather than free-form dimensions: lecture figures
/// come in exactly two shapes, a wide single plot and a two-panel wide plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FigSize {
    /// Wide single plot, 1000×600.
    Single,
    /// Two-panel wide plot, 1200×500.
    TwoPanel,
}

impl FigSize {
    /// Pixel dimensions `(width, height)` of the preset.
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            FigSize::Single => (1000, 600),
            FigSize::TwoPanel => (1200, 500),
        }
    }
}

/// Configuration consumed by the exporter.
///
/// An explicit value constructed by the caller and handed to
/// [`Exporter::new`](crate::Exporter::new). There is no process-wide state,
/// so an exporter cannot exist without a complete configuration.
///
/// # Example
///
/// ```rust
/// use chalcedon::{Config, DisplayMode};
///
/// let config = Config::new("Lecture1", DisplayMode::Web);
/// assert_eq!(config.save_path(), "Lecture1");
/// assert_eq!(config.mode().extension(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    save_path: String,
    mode: DisplayMode,
}

impl Config {
    /// Creates a configuration from an output directory name and a mode.
    ///
    /// `save_path` is the per-lecture directory under `images/` that all
    /// exported figures land in.
    pub fn new(save_path: impl Into<String>, mode: DisplayMode) -> Self {
        Self {
            save_path: save_path.into(),
            mode,
        }
    }

    /// The output directory name under `images/`.
    pub fn save_path(&self) -> &str {
        &self.save_path
    }

    /// The configured display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the same configuration retargeted at another mode.
    ///
    /// Useful when producing both web and slide renditions of one lecture:
    /// the output directory stays put while the theme and extension change.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(DisplayMode::from_name("web"), Some(DisplayMode::Web));
        assert_eq!(DisplayMode::from_name("slide"), Some(DisplayMode::Slide));
        assert_eq!(DisplayMode::from_name("beamer"), None);
        assert_eq!(DisplayMode::from_name(""), None);
    }

    #[test]
    fn test_mode_name_round_trip() {
        for mode in [DisplayMode::Web, DisplayMode::Slide] {
            assert_eq!(DisplayMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_mode_extension() {
        assert_eq!(DisplayMode::Web.extension(), "png");
        assert_eq!(DisplayMode::Slide.extension(), "pdf");
    }

    #[test]
    fn test_fig_size_dimensions() {
        assert_eq!(FigSize::Single.dimensions(), (1000, 600));
        assert_eq!(FigSize::TwoPanel.dimensions(), (1200, 500));
    }

    #[test]
    fn test_config_with_mode_keeps_save_path() {
        let config = Config::new("Lecture1", DisplayMode::Web);
        let retargeted = config.clone().with_mode(DisplayMode::Slide);
        assert_eq!(retargeted.save_path(), "Lecture1");
        assert_eq!(retargeted.mode(), DisplayMode::Slide);
        assert_eq!(config.mode(), DisplayMode::Web);
    }

    #[test]
    fn test_config_serializes_lowercase_mode() {
        let config = Config::new("L1", DisplayMode::Slide);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "slide");
    }
}
