//! Implementation of `kwp scan`.

use std::process::ExitCode;

use kwp_corpus::{Aggregator, LopdfSource, ScanOptions};
use kwp_phrase::{LinderaTokenizer, filter_noise};
use tracing::debug;

use crate::cli::{
    args::ScanCommand,
    context::CommandContext,
    output::{JsonScanOutput, ProgressLine, print_json, print_ranked, print_skipped},
};

/// Scans a folder of PDFs and prints the most frequent phrases.
pub fn run(ctx: &CommandContext, cmd: &ScanCommand) -> ExitCode {
    let mut config = ctx.config.clone();
    cmd.apply(&mut config);

    let options = match ScanOptions::from_config(&config) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tokenizer = match LinderaTokenizer::new() {
        Ok(tokenizer) => tokenizer,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let folder = ctx.resolve(&cmd.folder);
    debug!(folder = %folder.display(), min_gram = config.settings.min_gram, "starting scan");

    let aggregator = Aggregator::new(LopdfSource::new(config.extract.pages), tokenizer, options);
    let mut reporter = ProgressLine::stderr();
    let scan = match aggregator.scan(&folder, &mut reporter) {
        Ok(scan) => scan,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let table = if config.filter.noise {
        filter_noise(&scan.table)
    } else {
        scan.table
    };
    let ranked = table.ranked(Some(config.settings.limit));

    if cmd.phrase.json {
        return print_json(&JsonScanOutput::new(
            &cmd.folder,
            config.settings.min_gram,
            &scan.stats,
            &ranked,
        ));
    }

    print_skipped(&scan.stats);
    print_ranked(&ranked);
    ExitCode::SUCCESS
}
