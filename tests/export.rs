//! Integration tests for the exporter's filesystem contract.
//!
//! These tests change the working directory (export paths are resolved
//! relative to it), so they are serialized. Tests that actually write
//! figures need the Kaleido export binary and are ignored by default; run
//! them with `cargo test -- --ignored` where Kaleido is available.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chalcedon::{Config, DisplayMode, Error, ExportOptions, Exporter, FigSize, Figure};
use proptest::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Moves the process into a fresh directory, optionally pre-creating
/// `images/<save_path>/`, and restores the original directory on drop.
struct Workspace {
    original: PathBuf,
    _dir: TempDir,
}

impl Workspace {
    fn enter(save_path: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        if let Some(save_path) = save_path {
            fs::create_dir_all(dir.path().join("images").join(save_path)).unwrap();
        }
        let original = env::current_dir().unwrap();
        env::set_current_dir(dir.path()).unwrap();
        Self {
            original,
            _dir: dir,
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

fn line_figure() -> Figure {
    let mut figure = Figure::new();
    figure.apply_style(DisplayMode::Web, Some(FigSize::Single));
    figure.add_line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0], "x²");
    figure
}

#[test]
#[serial]
fn test_missing_output_dir_is_reported_not_created() {
    let _ws = Workspace::enter(None);
    let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));
    let err = exporter
        .store_fig(&mut line_figure(), "fig1", ExportOptions::new())
        .unwrap_err();
    assert!(matches!(err, Error::MissingOutputDir(_)));
    assert!(!Path::new("images/Lecture1").exists());
}

#[test]
#[serial]
fn test_unsupported_extension_fails_before_touching_disk() {
    let _ws = Workspace::enter(None);
    let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));
    let err = exporter
        .store_fig(
            &mut line_figure(),
            "fig1",
            ExportOptions::new().extension("tiff"),
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedExtension(_)));
}

#[test]
#[serial]
#[ignore = "requires the Kaleido export binary"]
fn test_end_to_end_web_then_slide() {
    let _ws = Workspace::enter(Some("Lecture1"));

    let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));
    let png = exporter
        .store_fig(&mut line_figure(), "fig1", ExportOptions::new())
        .unwrap();
    assert_eq!(png, Path::new("images/Lecture1/fig1.png"));
    assert!(png.is_file());

    // Retarget the same lecture at slides: new extension, old file untouched.
    let exporter = Exporter::new(exporter.config().clone().with_mode(DisplayMode::Slide));
    let pdf = exporter
        .store_fig(&mut line_figure(), "fig1", ExportOptions::new())
        .unwrap();
    assert_eq!(pdf, Path::new("images/Lecture1/fig1.pdf"));
    assert!(pdf.is_file());
    assert!(png.is_file());
}

#[test]
#[serial]
#[ignore = "requires the Kaleido export binary"]
fn test_export_overwrites_on_identical_arguments() {
    let _ws = Workspace::enter(Some("Lecture1"));
    let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));

    let first = exporter
        .store_fig(&mut line_figure(), "fig1", ExportOptions::new())
        .unwrap();
    let second = exporter
        .store_fig(&mut line_figure(), "fig1", ExportOptions::new())
        .unwrap();
    assert_eq!(first, second);
    assert!(second.is_file());
}

#[test]
#[serial]
#[ignore = "requires the Kaleido export binary"]
fn test_close_clears_the_figure() {
    let _ws = Workspace::enter(Some("Lecture1"));
    let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));

    let mut figure = line_figure();
    exporter
        .store_fig(&mut figure, "fig1", ExportOptions::new().close(true))
        .unwrap();
    assert_eq!(figure.trace_count(), 0);
}

proptest! {
    // Path resolution is pure, so the suffix properties hold for any
    // identifier without touching the filesystem.
    #[test]
    fn test_style_web_resolves_png(fig_id in "[a-zA-Z0-9_-]{1,16}") {
        let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Slide));
        let opts = ExportOptions::new().style("web");
        let path = exporter.resolve_path(&fig_id, &opts).unwrap();
        let suffix = format!("{}.png", fig_id);
        prop_assert!(path.to_str().unwrap().ends_with(&suffix));
    }

    #[test]
    fn test_style_slide_resolves_pdf(fig_id in "[a-zA-Z0-9_-]{1,16}") {
        let exporter = Exporter::new(Config::new("Lecture1", DisplayMode::Web));
        let opts = ExportOptions::new().style("slide");
        let path = exporter.resolve_path(&fig_id, &opts).unwrap();
        let suffix = format!("{}.pdf", fig_id);
        prop_assert!(path.to_str().unwrap().ends_with(&suffix));
    }
}
