//! Exclude pattern compilation and matching.
//!
//! Compiles the `[scan] exclude` globs into a single matcher that is tested
//! against PDF file names during folder discovery.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiled exclude globs.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    /// Combined matcher for all patterns.
    set: GlobSet,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }
}

impl ExcludePatterns {
    /// Compiles the given patterns into a matcher.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_glob(pattern)?);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: "<combined exclude patterns>".to_string(),
            source: e,
        })?;
        Ok(Self { set })
    }

    /// Returns true when the file name of `path` matches any exclude pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.set.is_match(name))
    }

    /// Returns true when no patterns were compiled.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Compiles a single glob pattern.
pub(crate) fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
