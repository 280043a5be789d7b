//! Error types for kwp configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A setting holds a value outside its allowed range.
    #[error("invalid value for {key} in {path}: {message}")]
    InvalidValue {
        /// Dotted key of the offending setting, e.g. `settings.min_gram`.
        key: &'static str,
        /// Config file that supplied the value.
        path: PathBuf,
        /// What is wrong with the value.
        message: String,
    },

    /// Failed to compile a glob pattern.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The invalid pattern.
        pattern: String,
        /// Underlying glob error.
        source: globset::Error,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
