//! Corpus aggregation.
//!
//! Runs every discovered PDF through the document analyzer and merges the
//! per-document tables into one corpus table. Files are processed in
//! file-name order; since merging is commutative the final counts do not
//! depend on that order.

use std::path::{Path, PathBuf};

use kwp_config::{Config, ExcludePatterns, OnError};
use kwp_phrase::{
    DocumentAnalyzer, FrequencyTable, MinGram, PhraseAssembler, RankedPhrase, Tokenizer,
    TrailingRun,
};
use tracing::{debug, info, warn};

use crate::{CorpusError, PdfSource, discover_pdfs};

/// Statistics from a folder scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Number of PDFs found in the folder.
    pub files_found: usize,
    /// Number of PDFs analyzed.
    pub files_processed: usize,
    /// Number of PDFs skipped because they could not be read.
    pub files_skipped: usize,
    /// Number of analyzed PDFs that yielded no text.
    pub files_without_text: usize,
    /// Total phrase occurrences counted across the corpus.
    pub phrases_counted: u64,
    /// Files that could not be read (file path, error message).
    pub errors: Vec<(PathBuf, String)>,
}

impl ScanStats {
    /// Returns true if every discovered file was read.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Callback for reporting scan progress.
pub trait ProgressReporter {
    /// Called when starting to process a file.
    fn on_file_start(&mut self, path: &Path, current: usize, total: usize);

    /// Called when a file was analyzed.
    fn on_file_done(&mut self, path: &Path, phrases: u64);

    /// Called when a file could not be read.
    fn on_file_error(&mut self, path: &Path, error: &str);

    /// Called when the scan is complete.
    fn on_complete(&mut self, stats: &ScanStats);
}

/// A no-op progress reporter for silent scans.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn on_file_start(&mut self, _path: &Path, _current: usize, _total: usize) {}
    fn on_file_done(&mut self, _path: &Path, _phrases: u64) {}
    fn on_file_error(&mut self, _path: &Path, _error: &str) {}
    fn on_complete(&mut self, _stats: &ScanStats) {}
}

/// Settings for a folder scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Minimum phrase length.
    pub min_gram: MinGram,
    /// Treatment of a noun run still open at the end of a document.
    pub trailing: TrailingRun,
    /// Policy for unreadable PDFs.
    pub on_error: OnError,
    /// File name patterns to leave out of the scan.
    pub excludes: ExcludePatterns,
}

impl ScanOptions {
    /// Creates options with the given minimum phrase length and defaults otherwise.
    pub fn new(min_gram: MinGram) -> Self {
        Self {
            min_gram,
            ..Self::default()
        }
    }

    /// Builds options from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, CorpusError> {
        let trailing = if config.extract.flush_trailing_run {
            TrailingRun::Flush
        } else {
            TrailingRun::Drop
        };
        Ok(Self {
            min_gram: MinGram::new(config.settings.min_gram)?,
            trailing,
            on_error: config.scan.on_error,
            excludes: config.compile_excludes()?,
        })
    }
}

/// The merged result of a folder scan.
#[derive(Debug, Clone, Default)]
pub struct CorpusScan {
    /// Phrase counts summed over every analyzed document.
    pub table: FrequencyTable,
    /// Scan statistics.
    pub stats: ScanStats,
}

impl CorpusScan {
    /// Returns the most frequent phrases, at most `limit` of them.
    pub fn ranked(&self, limit: usize) -> Vec<RankedPhrase> {
        self.table.ranked(Some(limit))
    }
}

/// Scans folders of PDFs into a corpus frequency table.
pub struct Aggregator<S, T> {
    /// Where document text comes from.
    source: S,
    /// Per-document phrase counter.
    analyzer: DocumentAnalyzer<T>,
    /// Policy for unreadable PDFs.
    on_error: OnError,
    /// File name patterns to leave out of the scan.
    excludes: ExcludePatterns,
}

impl<S: PdfSource, T: Tokenizer> Aggregator<S, T> {
    /// Creates an aggregator from a text source, tokenizer, and options.
    pub fn new(source: S, tokenizer: T, options: ScanOptions) -> Self {
        let assembler = PhraseAssembler::new(options.min_gram).with_trailing(options.trailing);
        Self {
            source,
            analyzer: DocumentAnalyzer::new(tokenizer, assembler),
            on_error: options.on_error,
            excludes: options.excludes,
        }
    }

    /// Scans `folder` and returns the merged phrase counts.
    ///
    /// An empty folder yields an empty table. Unreadable PDFs abort the
    /// scan unless the aggregator was built with [`OnError::Skip`].
    pub fn scan<R: ProgressReporter>(
        &self,
        folder: &Path,
        reporter: &mut R,
    ) -> Result<CorpusScan, CorpusError> {
        let files = discover_pdfs(folder, &self.excludes)?;
        let total = files.len();
        info!(folder = %folder.display(), files = total, "scanning");

        let mut scan = CorpusScan {
            table: FrequencyTable::new(),
            stats: ScanStats {
                files_found: total,
                ..ScanStats::default()
            },
        };

        for (idx, path) in files.iter().enumerate() {
            reporter.on_file_start(path, idx + 1, total);

            match self.analyze_file(path) {
                Ok((table, has_text)) => {
                    let phrases = table.total();
                    debug!(path = %path.display(), phrases, "analyzed");
                    reporter.on_file_done(path, phrases);
                    scan.stats.files_processed += 1;
                    scan.stats.phrases_counted += phrases;
                    if !has_text {
                        scan.stats.files_without_text += 1;
                    }
                    scan.table.merge(table);
                }
                Err(e) if e.is_input_error() && self.on_error == OnError::Skip => {
                    let message = e.to_string();
                    warn!(path = %path.display(), error = %message, "skipping unreadable PDF");
                    reporter.on_file_error(path, &message);
                    scan.stats.files_skipped += 1;
                    scan.stats.errors.push((path.clone(), message));
                }
                Err(e) => {
                    reporter.on_file_error(path, &e.to_string());
                    return Err(e);
                }
            }
        }

        info!(
            processed = scan.stats.files_processed,
            skipped = scan.stats.files_skipped,
            phrases = scan.table.len(),
            "scan complete"
        );
        reporter.on_complete(&scan.stats);
        Ok(scan)
    }

    /// Extracts and analyzes one PDF; the flag is false when it had no text.
    fn analyze_file(&self, path: &Path) -> Result<(FrequencyTable, bool), CorpusError> {
        let text = self.source.extract_text(path)?;
        let has_text = !text.trim().is_empty();
        let table = self.analyzer.analyze(&text)?;
        Ok((table, has_text))
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, fs};

    use kwp_phrase::{PhraseError, TaggedToken};
    use tempfile::TempDir;

    use super::*;

    /// Source that serves prepared text by file name; unknown files fail.
    #[derive(Default)]
    struct MemorySource(HashMap<String, String>);

    impl MemorySource {
        fn with(mut self, name: &str, text: &str) -> Self {
            self.0.insert(name.to_string(), text.to_string());
            self
        }
    }

    impl PdfSource for MemorySource {
        fn extract_text(&self, path: &Path) -> Result<String, CorpusError> {
            let name = path.file_name().unwrap().to_string_lossy();
            self.0
                .get(name.as_ref())
                .cloned()
                .ok_or_else(|| CorpusError::Pdf {
                    path: path.to_path_buf(),
                    message: "invalid PDF header".into(),
                })
        }
    }

    /// Whitespace tokenizer: ASCII words and listed particles are not nouns.
    struct SpaceTokenizer;

    impl Tokenizer for SpaceTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>, PhraseError> {
            Ok(text
                .split_whitespace()
                .map(|word| {
                    let pos = if word.is_ascii() {
                        "記号,アルファベット,*,*"
                    } else if matches!(word, "の" | "を" | "に" | "は") {
                        "助詞,格助詞,一般,*"
                    } else {
                        "名詞,一般,*,*"
                    };
                    TaggedToken::new(word, pos)
                })
                .collect())
        }
    }

    #[derive(Default)]
    struct TestReporter {
        events: Vec<String>,
    }

    impl ProgressReporter for TestReporter {
        fn on_file_start(&mut self, path: &Path, current: usize, total: usize) {
            let name = path.file_name().unwrap().to_string_lossy();
            self.events.push(format!("start: {name} ({current}/{total})"));
        }

        fn on_file_done(&mut self, path: &Path, phrases: u64) {
            let name = path.file_name().unwrap().to_string_lossy();
            self.events.push(format!("done: {name} ({phrases})"));
        }

        fn on_file_error(&mut self, path: &Path, _error: &str) {
            let name = path.file_name().unwrap().to_string_lossy();
            self.events.push(format!("error: {name}"));
        }

        fn on_complete(&mut self, stats: &ScanStats) {
            self.events
                .push(format!("complete: {} processed", stats.files_processed));
        }
    }

    fn folder_with(names: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::write(temp.path().join(name), "").unwrap();
        }
        temp
    }

    fn options(min_gram: usize) -> ScanOptions {
        ScanOptions::new(MinGram::new(min_gram).unwrap())
    }

    #[test]
    fn merges_counts_across_documents() {
        let temp = folder_with(&["a.pdf", "b.pdf"]);
        let source = MemorySource::default()
            .with("a.pdf", "振動 抑制 の 制御 Motor Drive ")
            .with("b.pdf", "振動 抑制 を 研究 Motor Drive ");
        let aggregator = Aggregator::new(source, SpaceTokenizer, options(2));

        let scan = aggregator.scan(temp.path(), &mut SilentReporter).unwrap();
        assert_eq!(scan.table.get("振動抑制"), 2);
        assert_eq!(scan.table.get("Motor Drive"), 2);
        assert_eq!(scan.stats.files_found, 2);
        assert_eq!(scan.stats.files_processed, 2);
        assert_eq!(scan.stats.phrases_counted, 4);
        assert!(scan.stats.is_success());

        let ranked = scan.ranked(1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].phrase, "振動抑制");
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn empty_folder_yields_empty_table() {
        let temp = TempDir::new().unwrap();
        let aggregator = Aggregator::new(MemorySource::default(), SpaceTokenizer, options(1));

        let scan = aggregator.scan(temp.path(), &mut SilentReporter).unwrap();
        assert!(scan.table.is_empty());
        assert_eq!(scan.stats.files_found, 0);
    }

    #[test]
    fn ignores_non_pdf_entries() {
        let temp = folder_with(&["paper.pdf", "notes.txt", "SCAN.PDF"]);
        let source = MemorySource::default().with("paper.pdf", "Motor ");
        let aggregator = Aggregator::new(source, SpaceTokenizer, options(1));

        let scan = aggregator.scan(temp.path(), &mut SilentReporter).unwrap();
        assert_eq!(scan.stats.files_found, 1);
        assert_eq!(scan.table.get("Motor"), 1);
    }

    #[test]
    fn unreadable_pdf_aborts_by_default() {
        let temp = folder_with(&["a.pdf", "broken.pdf", "c.pdf"]);
        let source = MemorySource::default()
            .with("a.pdf", "Motor ")
            .with("c.pdf", "Drive ");
        let aggregator = Aggregator::new(source, SpaceTokenizer, options(1));

        let mut reporter = TestReporter::default();
        let err = aggregator.scan(temp.path(), &mut reporter).unwrap_err();
        assert!(matches!(err, CorpusError::Pdf { .. }));
        assert_eq!(
            err.path().unwrap().file_name().unwrap().to_string_lossy(),
            "broken.pdf"
        );
        assert_eq!(reporter.events.last().unwrap(), "error: broken.pdf");
        assert!(!reporter.events.iter().any(|e| e.contains("c.pdf")));
    }

    #[test]
    fn unreadable_pdf_is_skipped_when_configured() {
        let temp = folder_with(&["a.pdf", "broken.pdf", "c.pdf"]);
        let source = MemorySource::default()
            .with("a.pdf", "Motor ")
            .with("c.pdf", "Motor ");
        let options = ScanOptions {
            on_error: OnError::Skip,
            ..options(1)
        };
        let aggregator = Aggregator::new(source, SpaceTokenizer, options);

        let scan = aggregator.scan(temp.path(), &mut SilentReporter).unwrap();
        assert_eq!(scan.table.get("Motor"), 2);
        assert_eq!(scan.stats.files_processed, 2);
        assert_eq!(scan.stats.files_skipped, 1);
        assert!(!scan.stats.is_success());
        assert!(scan.stats.errors[0].0.ends_with("broken.pdf"));
    }

    #[test]
    fn tokenizer_failure_is_never_skipped() {
        struct FailingTokenizer;

        impl Tokenizer for FailingTokenizer {
            fn tokenize(&self, _text: &str) -> Result<Vec<TaggedToken>, PhraseError> {
                Err(PhraseError::Tokenizer("dictionary missing".into()))
            }
        }

        let temp = folder_with(&["a.pdf"]);
        let source = MemorySource::default().with("a.pdf", "研究 ");
        let options = ScanOptions {
            on_error: OnError::Skip,
            ..options(1)
        };
        let aggregator = Aggregator::new(source, FailingTokenizer, options);

        let err = aggregator.scan(temp.path(), &mut SilentReporter).unwrap_err();
        assert!(matches!(err, CorpusError::Phrase(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn documents_without_text_are_counted() {
        let temp = folder_with(&["blank.pdf", "text.pdf"]);
        let source = MemorySource::default()
            .with("blank.pdf", "  ")
            .with("text.pdf", "Motor ");
        let aggregator = Aggregator::new(source, SpaceTokenizer, options(1));

        let scan = aggregator.scan(temp.path(), &mut SilentReporter).unwrap();
        assert_eq!(scan.stats.files_processed, 2);
        assert_eq!(scan.stats.files_without_text, 1);
    }

    #[test]
    fn trailing_run_follows_options() {
        let temp = folder_with(&["a.pdf"]);
        let text = "研究 開発";

        let dropping = Aggregator::new(
            MemorySource::default().with("a.pdf", text),
            SpaceTokenizer,
            options(2),
        );
        let scan = dropping.scan(temp.path(), &mut SilentReporter).unwrap();
        assert!(scan.table.is_empty());

        let flushing = Aggregator::new(
            MemorySource::default().with("a.pdf", text),
            SpaceTokenizer,
            ScanOptions {
                trailing: TrailingRun::Flush,
                ..options(2)
            },
        );
        let scan = flushing.scan(temp.path(), &mut SilentReporter).unwrap();
        assert_eq!(scan.table.get("研究開発"), 1);
    }

    #[test]
    fn reports_progress_in_file_name_order() {
        let temp = folder_with(&["b.pdf", "a.pdf"]);
        let source = MemorySource::default()
            .with("a.pdf", "Motor ")
            .with("b.pdf", "Drive Train ");
        let aggregator = Aggregator::new(source, SpaceTokenizer, options(1));

        let mut reporter = TestReporter::default();
        aggregator.scan(temp.path(), &mut reporter).unwrap();
        assert_eq!(
            reporter.events,
            vec![
                "start: a.pdf (1/2)",
                "done: a.pdf (1)",
                "start: b.pdf (2/2)",
                "done: b.pdf (2)",
                "complete: 2 processed",
            ]
        );
    }

    #[test]
    fn options_from_config() {
        let mut config = Config::default();
        config.settings.min_gram = 3;
        config.extract.flush_trailing_run = true;
        config.scan.on_error = OnError::Skip;
        config.scan.exclude = vec!["draft-*".into()];

        let options = ScanOptions::from_config(&config).unwrap();
        assert_eq!(options.min_gram.get(), 3);
        assert_eq!(options.trailing, TrailingRun::Flush);
        assert_eq!(options.on_error, OnError::Skip);
        assert!(options.excludes.is_excluded(Path::new("draft-2.pdf")));

        config.settings.min_gram = 0;
        let err = ScanOptions::from_config(&config).unwrap_err();
        assert!(err.is_config_error());
    }
}
