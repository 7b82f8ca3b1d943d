//! Crate-level error type.

use std::path::PathBuf;

/// Errors returned by export and display operations.
///
/// Styling itself never fails: applying a sheet is a table lookup, and an
/// unrecognized mode name is a documented no-op rather than an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `images/<save_path>/` directory does not exist.
    ///
    /// The exporter never creates directories; preparing the output tree is
    /// the caller's responsibility.
    #[error("output directory '{0}' does not exist")]
    MissingOutputDir(PathBuf),

    /// The requested file extension has no matching export format.
    #[error("unsupported figure extension '{0}'")]
    UnsupportedExtension(String),

    /// The export engine returned without producing a file.
    #[error("export produced no file at '{0}'")]
    ExportFailed(PathBuf),

    /// A per-image option list is shorter than the subplot grid it decorates.
    #[error("expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// More grid cells than the layout can address individually.
    #[error("subplot grids support at most {max} cells, got {cells}")]
    GridTooLarge { cells: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_output_dir_display() {
        let err = Error::MissingOutputDir(PathBuf::from("images/Lecture1"));
        assert!(err.to_string().contains("images/Lecture1"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = Error::LengthMismatch {
            what: "titles",
            expected: 4,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("titles"));
        assert!(msg.contains('4'));
        assert!(msg.contains('2'));
    }
}
