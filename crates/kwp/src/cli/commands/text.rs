//! Implementation of `kwp text`.

use std::{io, process::ExitCode};

use kwp_phrase::{
    DocumentAnalyzer, LinderaTokenizer, MinGram, PhraseAssembler, PhraseError, TrailingRun,
    filter_noise,
};

use crate::cli::{
    args::TextCommand,
    context::CommandContext,
    output::{JsonTextOutput, print_json, print_ranked},
};

/// Analyzes a single text and prints its most frequent phrases.
pub fn run(ctx: &CommandContext, cmd: &TextCommand) -> ExitCode {
    let mut config = ctx.config.clone();
    cmd.phrase.apply(&mut config);

    let analyzer = match build_analyzer(config.settings.min_gram, config.extract.flush_trailing_run)
    {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let text = match &cmd.text {
        Some(text) => text.clone(),
        None => match io::read_to_string(io::stdin()) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let table = match analyzer.analyze(&text) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let table = if config.filter.noise {
        filter_noise(&table)
    } else {
        table
    };
    let ranked = table.ranked(Some(config.settings.limit));

    if cmd.phrase.json {
        return print_json(&JsonTextOutput {
            min_gram: config.settings.min_gram,
            phrases: &ranked,
        });
    }

    print_ranked(&ranked);
    ExitCode::SUCCESS
}

/// Validates the min-gram, then loads the dictionary.
fn build_analyzer(
    min_gram: usize,
    flush_trailing: bool,
) -> Result<DocumentAnalyzer<LinderaTokenizer>, PhraseError> {
    let min_gram = MinGram::new(min_gram)?;
    let trailing = if flush_trailing {
        TrailingRun::Flush
    } else {
        TrailingRun::Drop
    };
    let assembler = PhraseAssembler::new(min_gram).with_trailing(trailing);
    Ok(DocumentAnalyzer::new(LinderaTokenizer::new()?, assembler))
}
