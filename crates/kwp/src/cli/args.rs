//! Clap argument definitions for the `kwp` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use kwp_config::{Config, OnError};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kwp", version)]
#[command(about = "Keyword phrase picker - frequent phrases across a folder of PDF papers")]
pub struct Cli {
    /// Log verbosity (-v for progress, -vv for per-file details)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by commands that extract and rank phrases.
#[derive(Args, Debug, Clone, Default)]
pub struct PhraseArgs {
    /// Minimum nouns (Japanese) or words (English) per phrase [default: 1]
    #[arg(short = 'g', long)]
    pub min_gram: Option<usize>,

    /// Number of phrases to show [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Keep a noun run that is still open when the text ends
    #[arg(long)]
    pub flush_trailing: bool,

    /// Keep single-letter noise such as "A B"
    #[arg(long)]
    pub no_filter: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl PhraseArgs {
    /// Applies the flags on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(min_gram) = self.min_gram {
            config.settings.min_gram = min_gram;
        }
        if let Some(limit) = self.limit {
            config.settings.limit = limit;
        }
        if self.flush_trailing {
            config.extract.flush_trailing_run = true;
        }
        if self.no_filter {
            config.filter.noise = false;
        }
    }
}

/// Arguments for `kwp scan`.
#[derive(Args, Debug, Clone)]
pub struct ScanCommand {
    /// Folder containing the PDFs to analyze (subfolders are not scanned)
    pub folder: PathBuf,

    /// Shared phrase flags.
    #[command(flatten)]
    pub phrase: PhraseArgs,

    /// Leading pages read from each PDF [default: 2]
    #[arg(long)]
    pub pages: Option<usize>,

    /// Log unreadable PDFs and continue instead of stopping
    #[arg(long)]
    pub skip_errors: bool,
}

impl ScanCommand {
    /// Applies the flags on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        self.phrase.apply(config);
        if let Some(pages) = self.pages {
            config.extract.pages = pages;
        }
        if self.skip_errors {
            config.scan.on_error = OnError::Skip;
        }
    }
}

/// Arguments for `kwp text`.
#[derive(Args, Debug, Clone)]
pub struct TextCommand {
    /// Text to analyze; read from stdin when omitted
    pub text: Option<String>,

    /// Shared phrase flags.
    #[command(flatten)]
    pub phrase: PhraseArgs,
}

/// Arguments for `kwp init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.kwp.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `kwp` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank the most frequent phrases across the PDFs in a folder
    #[command(after_help = "\
EXAMPLES:
  kwp scan ./papers
  kwp scan ./papers -g 2 -n 20
  kwp scan ./papers --skip-errors --json")]
    Scan(ScanCommand),

    /// Rank the phrases in a single piece of text
    Text(TextCommand),

    /// Initialize kwp configuration in current directory
    Init(InitCommand),

    /// Validate configuration and diagnose issues
    Check,

    /// Show config files and effective settings
    Config,
}

impl Commands {
    /// Returns false for commands that must run even when the config is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_) | Self::Check)
    }
}
