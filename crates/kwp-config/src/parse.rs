//! Configuration file parsing.
//!
//! Parses individual `.kwp.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, OnError};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Extraction settings section.
    pub extract: Option<RawExtractSettings>,
    /// Scan settings section.
    pub scan: Option<RawScanSettings>,
    /// Filter settings section.
    pub filter: Option<RawFilterSettings>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Minimum phrase length in tokens or words.
    pub min_gram: Option<usize>,
    /// Number of ranked phrases shown.
    pub limit: Option<usize>,
}

/// Raw extraction settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExtractSettings {
    /// Leading pages read per PDF.
    pub pages: Option<usize>,
    /// Emit the open noun run at end of stream.
    pub flush_trailing_run: Option<bool>,
}

/// Raw scan settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawScanSettings {
    /// Policy for unreadable PDFs.
    pub on_error: Option<OnError>,
    /// Exclude globs. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Raw filter settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFilterSettings {
    /// Apply the single-letter noise filter.
    pub noise: Option<bool>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.settings.is_none());
        assert!(config.extract.is_none());
        assert!(config.scan.is_none());
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
root = true

[settings]
min_gram = 3
limit = 25

[extract]
pages = 1
flush_trailing_run = true

[scan]
on_error = "skip"
exclude = ["draft-*", "*-old.pdf"]

[filter]
noise = false
"#,
        );
        assert_eq!(config.root, Some(true));

        let settings = config.settings.unwrap();
        assert_eq!(settings.min_gram, Some(3));
        assert_eq!(settings.limit, Some(25));

        let extract = config.extract.unwrap();
        assert_eq!(extract.pages, Some(1));
        assert_eq!(extract.flush_trailing_run, Some(true));

        let scan = config.scan.unwrap();
        assert_eq!(scan.on_error, Some(OnError::Skip));
        assert_eq!(
            scan.exclude,
            Some(vec!["draft-*".to_string(), "*-old.pdf".to_string()])
        );

        assert_eq!(config.filter.unwrap().noise, Some(false));
    }

    #[test]
    fn test_parse_partial_settings() {
        let config = parse("[settings]\nlimit = 3\n");
        let settings = config.settings.unwrap();
        assert_eq!(settings.limit, Some(3));
        assert!(settings.min_gram.is_none());
    }

    #[test]
    fn test_parse_exclude_single_string() {
        let config = parse("[scan]\nexclude = \"scratch*\"\n");
        assert_eq!(
            config.scan.unwrap().exclude,
            Some(vec!["scratch*".to_string()])
        );
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let result = parse_config_str("[scan]\non_error = \"retry\"\n", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("[settings\nmin_gram = ", Path::new("bad.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
