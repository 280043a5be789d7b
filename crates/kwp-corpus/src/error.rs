//! Error types for the kwp-corpus crate.

use std::path::{Path, PathBuf};

use kwp_config::ConfigError;
use kwp_phrase::PhraseError;
use thiserror::Error;

/// Errors that can occur while scanning a folder of PDFs.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The folder to scan does not exist.
    #[error("folder does not exist: {path}")]
    FolderNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path to scan is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The folder listing failed.
    #[error("failed to list {path}: {source}")]
    ReadDir {
        /// Folder being listed.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// A PDF could not be opened or parsed.
    #[error("failed to read PDF {path}: {message}")]
    Pdf {
        /// Path to the PDF.
        path: PathBuf,
        /// Error message from the PDF parser.
        message: String,
    },

    /// Phrase extraction failed or was misconfigured.
    #[error(transparent)]
    Phrase(#[from] PhraseError),

    /// Scan settings could not be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CorpusError {
    /// Creates a `Pdf` error from a path and parser error.
    pub(crate) fn pdf(path: &Path, source: &lopdf::Error) -> Self {
        Self::Pdf {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }

    /// Returns true for errors caused by the input folder or its files.
    ///
    /// Only these errors may be skipped under the `skip` policy.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::FolderNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::ReadDir { .. }
                | Self::Pdf { .. }
        )
    }

    /// Returns true for errors caused by invalid settings.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Phrase(PhraseError::InvalidMinGram(_)) | Self::Config(_)
        )
    }

    /// Returns the path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FolderNotFound { path }
            | Self::NotADirectory { path }
            | Self::ReadDir { path, .. }
            | Self::Pdf { path, .. } => Some(path),
            Self::Phrase(_) | Self::Config(_) => None,
        }
    }
}
