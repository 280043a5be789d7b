//! Implementation of `kwp check`.

use std::process::ExitCode;

use kwp_config::{Config, ConfigWarning, discover_config_files};

use crate::cli::context::CommandContext;

/// Exit codes for `kwp check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
    /// Configuration has errors and cannot be used.
    pub const ERROR: ExitCode = ExitCode::FAILURE;
}

/// Loads and validates the configuration, printing warnings and hints.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'kwp init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("Config files:");
    for path in &config_files {
        println!("  {}", path.display());
    }
    println!();

    let config = match Config::load(&ctx.cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_codes::ERROR;
        }
    };

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::NoPagesRead => "Set [extract] pages to at least 1.",
            ConfigWarning::ZeroLimit => "Set [settings] limit to at least 1.",
            ConfigWarning::LargeMinGram { .. } => {
                "Lower [settings] min_gram; most keyword phrases are 1 to 4 words long."
            }
            ConfigWarning::ExcludesEverything { .. } => {
                "Narrow the [scan] exclude pattern so it names specific files."
            }
            ConfigWarning::InvalidExclude { .. } => {
                "Fix the glob syntax of the [scan] exclude pattern."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    println!("Hints:");
    for hint in hints {
        println!("  - {hint}");
    }
}
