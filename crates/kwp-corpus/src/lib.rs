//! Folder scanning and corpus-wide phrase counting.
//!
//! This crate connects PDF files on disk to the phrase pipeline in
//! `kwp-phrase`. It handles:
//! - Discovering the PDFs directly inside a folder
//! - Extracting the text of their leading pages
//! - Merging per-document phrase counts into one corpus table
//! - Ranking the corpus table after noise filtering
//!
//! # Example
//!
//! ```no_run
//! use kwp_corpus::analyze_folder;
//!
//! let top = analyze_folder("./papers".as_ref(), 2).unwrap();
//! for entry in top {
//!     println!("{}: {}", entry.phrase, entry.count);
//! }
//! ```

#![warn(missing_docs)]

mod aggregate;
mod discovery;
mod error;
mod pdf;

use std::path::Path;

pub use aggregate::{
    Aggregator, CorpusScan, ProgressReporter, ScanOptions, ScanStats, SilentReporter,
};
pub use discovery::{PDF_SUFFIX, discover_pdfs};
pub use error::CorpusError;
use kwp_phrase::{LinderaTokenizer, MinGram, RankedPhrase, filter_noise};
pub use pdf::{DEFAULT_PAGES, LopdfSource, PdfSource};

/// Number of phrases returned by [`analyze_folder`].
pub const TOP_PHRASES: usize = 10;

/// Returns the ten most frequent phrases across the PDFs in `folder`.
///
/// Reads the first two pages of each PDF, aborts on the first unreadable
/// file, and drops single-letter noise before ranking. Ties keep the order
/// in which phrases were first seen. An invalid `min_gram` is rejected
/// before the folder is touched.
pub fn analyze_folder(folder: &Path, min_gram: usize) -> Result<Vec<RankedPhrase>, CorpusError> {
    let min_gram = MinGram::new(min_gram)?;
    let tokenizer = LinderaTokenizer::new()?;
    let aggregator = Aggregator::new(
        LopdfSource::default(),
        tokenizer,
        ScanOptions::new(min_gram),
    );
    let scan = aggregator.scan(folder, &mut SilentReporter)?;
    Ok(filter_noise(&scan.table).ranked(Some(TOP_PHRASES)))
}
