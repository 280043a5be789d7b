//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings that are
//! legal but almost certainly not what the user wants.

use std::fmt;

use crate::{Config, MAX_SUGGESTED_MIN_GRAM, patterns::compile_glob};

/// Sample PDF names used to detect exclude patterns that would hide every document.
const SAMPLE_PDF_NAMES: &[&str] = &["report.pdf", "a.pdf", "2024_abstract.pdf", "論文.pdf"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `extract.pages` is zero, so no text is ever read.
    NoPagesRead,
    /// `settings.limit` is zero, so no result rows are shown.
    ZeroLimit,
    /// `settings.min_gram` exceeds [`MAX_SUGGESTED_MIN_GRAM`].
    LargeMinGram {
        /// Configured min-gram.
        min_gram: usize,
    },
    /// An exclude pattern matches every PDF name.
    ExcludesEverything {
        /// The offending pattern.
        pattern: String,
    },
    /// An exclude pattern does not compile.
    InvalidExclude {
        /// The offending pattern.
        pattern: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPagesRead => write!(f, "extract.pages is 0; no text will be read"),
            Self::ZeroLimit => write!(f, "settings.limit is 0; no results will be shown"),
            Self::LargeMinGram { min_gram } => write!(
                f,
                "settings.min_gram is {min_gram}; phrases that long are rare \
                 (suggested maximum {MAX_SUGGESTED_MIN_GRAM})"
            ),
            Self::ExcludesEverything { pattern } => {
                write!(f, "exclude pattern '{pattern}' matches every PDF")
            }
            Self::InvalidExclude { pattern } => {
                write!(f, "exclude pattern '{pattern}' is not a valid glob")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.extract.pages == 0 {
        warnings.push(ConfigWarning::NoPagesRead);
    }
    if config.settings.limit == 0 {
        warnings.push(ConfigWarning::ZeroLimit);
    }
    if config.settings.min_gram > MAX_SUGGESTED_MIN_GRAM {
        warnings.push(ConfigWarning::LargeMinGram {
            min_gram: config.settings.min_gram,
        });
    }

    for pattern in &config.scan.exclude {
        let Ok(glob) = compile_glob(pattern) else {
            warnings.push(ConfigWarning::InvalidExclude {
                pattern: pattern.clone(),
            });
            continue;
        };
        let matcher = glob.compile_matcher();
        if SAMPLE_PDF_NAMES.iter().all(|name| matcher.is_match(name)) {
            warnings.push(ConfigWarning::ExcludesEverything {
                pattern: pattern.clone(),
            });
        }
    }

    warnings
}
