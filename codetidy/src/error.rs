//! Error types for the tidy pipeline.

use std::path::PathBuf;

/// Errors that stop a pipeline run.
///
/// A run either produces a complete output and report, or it fails with one of
/// these and no output is written.
#[derive(Debug, thiserror::Error)]
pub enum TidyError {
    /// The file extension is not one of the recognized languages.
    #[error(
        "Unsupported file format '{}'. Use {} files.",
        .path.display(),
        crate::language::supported_extensions_hint()
    )]
    UnsupportedLanguage {
        /// Path whose extension could not be mapped.
        path: PathBuf,
    },
    /// A `--lang` override named an unknown language.
    #[error("Unknown language '{0}'. Expected one of: c, cpp, java, python.")]
    UnknownLanguageName(String),
    /// The input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The requested output location cannot be used for this run.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}

impl TidyError {
    /// Whether this error only informs the operator (the pipeline never started).
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage { .. } | Self::UnknownLanguageName(_)
        )
    }
}
