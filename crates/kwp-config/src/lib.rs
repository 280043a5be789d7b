//! Configuration system for kwp.
//!
//! kwp uses TOML configuration files named `.kwp.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.kwp.toml` files
//! found, then loading `~/.kwp.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawExtractSettings, RawFilterSettings, RawScanSettings, RawSettings,
    parse_config_file, parse_config_str,
};
pub use patterns::ExcludePatterns;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Largest min-gram accepted without a warning.
pub const MAX_SUGGESTED_MIN_GRAM: usize = 10;

/// Top-level merged configuration for kwp.
///
/// This represents the fully resolved configuration after merging all discovered `.kwp.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Text extraction settings.
    pub extract: ExtractSettings,
    /// Folder scan settings.
    pub scan: ScanSettings,
    /// Result filtering settings.
    pub filter: FilterSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.kwp.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.kwp.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.kwp.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Compiles the configured exclude globs into a matcher.
    pub fn compile_excludes(&self) -> Result<ExcludePatterns, ConfigError> {
        ExcludePatterns::compile(&self.scan.exclude)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.kwp.toml` file.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            settings: &self.settings,
            extract: &self.extract,
            scan: &self.scan,
            filter: &self.filter,
        };
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// General settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum number of tokens or words in an emitted phrase.
    pub min_gram: usize,
    /// Number of ranked phrases shown.
    pub limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_gram: 1,
            limit: 10,
        }
    }
}

/// Text extraction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Number of leading pages read from each PDF.
    pub pages: usize,
    /// Emit the noun run still open when the token stream ends.
    pub flush_trailing_run: bool,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            pages: 2,
            flush_trailing_run: false,
        }
    }
}

/// What to do with a PDF that cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop the scan and report the failing file.
    #[default]
    Abort,
    /// Log the failure, record it, and continue with the next file.
    Skip,
}

/// Folder scan settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Policy for unreadable PDFs.
    pub on_error: OnError,
    /// Glob patterns matched against file names; matching files are not scanned.
    pub exclude: Vec<String>,
}

/// Result filtering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Drop phrases made only of single letters separated by spaces.
    pub noise: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self { noise: true }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Text extraction settings.
    extract: &'a ExtractSettings,
    /// Folder scan settings.
    scan: &'a ScanSettings,
    /// Result filtering settings.
    filter: &'a FilterSettings,
}
