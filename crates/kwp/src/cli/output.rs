//! Result rendering for the terminal and for JSON consumers.

use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use kwp_corpus::{ProgressReporter, ScanStats};
use kwp_highlight::{Highlighter, bar, dim, warning};
use kwp_phrase::RankedPhrase;
use serde::Serialize;

/// Message printed when a scan or text yields no phrases.
pub const NO_KEYWORDS: &str = "No keywords found.";

/// Width of the frequency bar column.
const BAR_WIDTH: usize = 24;

/// JSON output for `kwp scan`.
#[derive(Serialize)]
pub struct JsonScanOutput<'a> {
    /// Scanned folder.
    pub folder: &'a Path,
    /// Minimum phrase length used.
    pub min_gram: usize,
    /// Number of PDFs analyzed.
    pub files_processed: usize,
    /// PDFs that could not be read.
    pub skipped: Vec<JsonSkipped>,
    /// Ranked phrases, most frequent first.
    pub phrases: &'a [RankedPhrase],
}

/// A PDF left out of a scan.
#[derive(Serialize)]
pub struct JsonSkipped {
    /// Path to the PDF.
    pub path: PathBuf,
    /// Why it was skipped.
    pub error: String,
}

impl<'a> JsonScanOutput<'a> {
    /// Builds the output from scan statistics and the ranked list.
    pub fn new(
        folder: &'a Path,
        min_gram: usize,
        stats: &ScanStats,
        phrases: &'a [RankedPhrase],
    ) -> Self {
        Self {
            folder,
            min_gram,
            files_processed: stats.files_processed,
            skipped: stats
                .errors
                .iter()
                .map(|(path, error)| JsonSkipped {
                    path: path.clone(),
                    error: error.clone(),
                })
                .collect(),
            phrases,
        }
    }
}

/// JSON output for `kwp text`.
#[derive(Serialize)]
pub struct JsonTextOutput<'a> {
    /// Minimum phrase length used.
    pub min_gram: usize,
    /// Ranked phrases, most frequent first.
    pub phrases: &'a [RankedPhrase],
}

/// Prints a value as pretty JSON, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if io::stdout().is_terminal() {
                println!("{}", Highlighter::default().highlight_json(&json));
            } else {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints ranked phrases as a table, or a notice when there are none.
pub fn print_ranked(phrases: &[RankedPhrase]) {
    if phrases.is_empty() {
        println!("{NO_KEYWORDS}");
        return;
    }
    println!("{}", ranked_table(phrases));
}

/// Builds the ranking table with a frequency bar per row.
fn ranked_table(phrases: &[RankedPhrase]) -> Table {
    let max = phrases.first().map_or(0, |p| p.count);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Phrase", "Count", ""]);
    for (rank, phrase) in phrases.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&phrase.phrase),
            Cell::new(phrase.count).set_alignment(CellAlignment::Right),
            Cell::new(bar(phrase.count, max, BAR_WIDTH)),
        ]);
    }
    table
}

/// Prints a warning listing the PDFs a scan skipped.
pub fn print_skipped(stats: &ScanStats) {
    if stats.errors.is_empty() {
        return;
    }
    eprintln!(
        "{}",
        warning(&format!("skipped {} unreadable PDF(s):", stats.errors.len()))
    );
    for (path, error) in &stats.errors {
        eprintln!("  {} {}", path.display(), dim(error));
    }
}

/// Reports per-file progress on stderr when it is a terminal.
pub struct ProgressLine {
    /// Whether to print anything.
    enabled: bool,
}

impl ProgressLine {
    /// Creates a reporter that prints only when stderr is a terminal.
    pub fn stderr() -> Self {
        Self {
            enabled: io::stderr().is_terminal(),
        }
    }
}

impl ProgressReporter for ProgressLine {
    fn on_file_start(&mut self, path: &Path, current: usize, total: usize) {
        if self.enabled {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            eprintln!("{}", dim(&format!("[{current}/{total}] {name}")));
        }
    }

    fn on_file_done(&mut self, _path: &Path, _phrases: u64) {}

    fn on_file_error(&mut self, _path: &Path, _error: &str) {}

    fn on_complete(&mut self, stats: &ScanStats) {
        if self.enabled && stats.files_found > 0 {
            eprintln!(
                "{}",
                dim(&format!(
                    "{} of {} PDFs analyzed",
                    stats.files_processed, stats.files_found
                ))
            );
        }
    }
}
