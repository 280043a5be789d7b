//! PDF discovery.
//!
//! Lists the immediate children of a folder and keeps regular files whose
//! name ends in `.pdf`, sorted by file name. Subfolders are not descended
//! into and the suffix match is case-sensitive.

use std::path::{Path, PathBuf};

use kwp_config::ExcludePatterns;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::CorpusError;

/// File name suffix identifying documents to analyze.
pub const PDF_SUFFIX: &str = ".pdf";

/// Returns the PDFs directly inside `folder`, sorted by file name.
pub fn discover_pdfs(folder: &Path, excludes: &ExcludePatterns) -> Result<Vec<PathBuf>, CorpusError> {
    if !folder.exists() {
        return Err(CorpusError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }
    if !folder.is_dir() {
        return Err(CorpusError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(CorpusError::ReadDir {
                    path: folder.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !has_pdf_suffix(&entry) || !is_file(&entry) {
            continue;
        }

        if excludes.is_excluded(entry.path()) {
            debug!(path = %entry.path().display(), "excluded");
            continue;
        }

        files.push(entry.into_path());
    }

    debug!(folder = %folder.display(), count = files.len(), "discovered PDFs");
    Ok(files)
}

/// Checks the raw file name so non-UTF-8 names are still matched.
fn has_pdf_suffix(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .as_encoded_bytes()
        .ends_with(PDF_SUFFIX.as_bytes())
}

/// Regular files and symlinks that resolve to regular files.
fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
