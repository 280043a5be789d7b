//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and range checks.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ExtractSettings, FilterSettings, ScanSettings, Settings,
    parse::{RawConfig, RawExtractSettings, RawFilterSettings, RawScanSettings, RawSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Exclude patterns: the most specific file that defines them wins completely
///
/// A `min_gram` of zero anywhere in the chain is rejected.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    for parsed in configs {
        check_ranges(&parsed.path, &parsed.config)?;
    }

    let mut settings = Settings::default();
    let mut extract = ExtractSettings::default();
    let mut scan = ScanSettings::default();
    let mut filter = FilterSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref v) = raw.settings {
            apply_raw_settings(&mut settings, v);
        }
        if let Some(ref v) = raw.extract {
            apply_raw_extract(&mut extract, v);
        }
        if let Some(ref v) = raw.scan {
            apply_raw_scan(&mut scan, v);
        }
        if let Some(ref v) = raw.filter {
            apply_raw_filter(&mut filter, v);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent().map(Path::to_path_buf));

    Ok(Config {
        settings,
        extract,
        scan,
        filter,
        config_root,
    })
}

/// Rejects values that can never produce a meaningful scan.
fn check_ranges(path: &Path, raw: &RawConfig) -> Result<(), ConfigError> {
    if let Some(RawSettings {
        min_gram: Some(0), ..
    }) = raw.settings
    {
        return Err(ConfigError::InvalidValue {
            key: "settings.min_gram",
            path: path.to_path_buf(),
            message: "must be a positive integer".to_string(),
        });
    }
    Ok(())
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.min_gram {
        result.min_gram = v;
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Applies raw extraction settings.
fn apply_raw_extract(result: &mut ExtractSettings, raw: &RawExtractSettings) {
    if let Some(v) = raw.pages {
        result.pages = v;
    }
    if let Some(v) = raw.flush_trailing_run {
        result.flush_trailing_run = v;
    }
}

/// Applies raw scan settings.
fn apply_raw_scan(result: &mut ScanSettings, raw: &RawScanSettings) {
    if let Some(v) = raw.on_error {
        result.on_error = v;
    }
    if let Some(ref v) = raw.exclude {
        result.exclude = v.clone();
    }
}

/// Applies raw filter settings.
fn apply_raw_filter(result: &mut FilterSettings, raw: &RawFilterSettings) {
    if let Some(v) = raw.noise {
        result.noise = v;
    }
}
