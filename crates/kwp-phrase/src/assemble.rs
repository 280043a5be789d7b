//! Phrase assembly.
//!
//! Two independent scans produce phrases from the same document:
//!
//! - [`noun_phrases`] walks the tagged tokens and joins each run of
//!   consecutive nouns into one phrase with no separator. Japanese compounds
//!   such as 振動抑制制御 are split into several nouns by the tokenizer, so
//!   the run is what carries the keyword.
//! - [`english_phrases`] walks the raw text for alphabetic words and emits
//!   non-overlapping groups of exactly min-gram words joined by a space.
//!
//! The tokenizer splits Japanese and English at different granularities, so
//! the scans are kept separate rather than merged into a single pass.

use std::{fmt, num::NonZeroUsize, sync::LazyLock};

use regex::Regex;

use crate::{PhraseError, TaggedToken, clean};

/// Whole words made only of ASCII letters.
static ENGLISH_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Minimum number of tokens or words in an emitted phrase. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinGram(NonZeroUsize);

impl MinGram {
    /// Creates a min-gram, rejecting zero.
    pub fn new(value: usize) -> Result<Self, PhraseError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(PhraseError::InvalidMinGram(value))
    }

    /// Returns the numeric value.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for MinGram {
    fn default() -> Self {
        Self(NonZeroUsize::MIN)
    }
}

impl TryFrom<usize> for MinGram {
    type Error = PhraseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MinGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Treatment of a noun run that is still open when the token stream ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRun {
    /// Discard the open run. Text ending in a noun loses its last phrase.
    #[default]
    Drop,
    /// Close the open run as if a non-noun token followed it.
    Flush,
}

/// Joins runs of consecutive noun tokens into phrases.
///
/// Each noun surface is cleaned first; a surface that cleans to nothing is
/// skipped without ending the run. Any non-noun token ends the run, which is
/// emitted when it holds at least `min_gram` surfaces.
pub fn noun_phrases(tokens: &[TaggedToken], min_gram: MinGram, trailing: TrailingRun) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for token in tokens {
        if token.is_noun() {
            let surface = clean(&token.surface);
            if !surface.is_empty() {
                run.push(surface);
            }
        } else {
            close_run(&mut run, min_gram, &mut phrases);
        }
    }

    if trailing == TrailingRun::Flush {
        close_run(&mut run, min_gram, &mut phrases);
    }

    phrases
}

/// Emits the run if it is long enough, then empties it.
fn close_run(run: &mut Vec<String>, min_gram: MinGram, phrases: &mut Vec<String>) {
    if run.len() >= min_gram.get() {
        phrases.push(run.concat());
    }
    run.clear();
}

/// Groups the alphabetic words of `text` into phrases of exactly `min_gram` words.
///
/// Groups do not overlap: after each emitted phrase the next group starts
/// empty. Words left over at the end of the text are dropped.
pub fn english_phrases(text: &str, min_gram: MinGram) -> Vec<String> {
    let size = min_gram.get();
    let mut phrases = Vec::new();
    let mut group: Vec<String> = Vec::with_capacity(size);

    for word in ENGLISH_WORD.find_iter(text).map(|m| clean(m.as_str())) {
        if word.is_empty() {
            continue;
        }
        group.push(word);
        if group.len() == size {
            phrases.push(group.join(" "));
            group.clear();
        }
    }

    phrases
}

/// Combines the noun-run and English-word scans under one min-gram setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseAssembler {
    /// Minimum phrase length.
    min_gram: MinGram,
    /// End-of-stream handling for noun runs.
    trailing: TrailingRun,
}

impl PhraseAssembler {
    /// Creates an assembler that drops trailing noun runs.
    pub fn new(min_gram: MinGram) -> Self {
        Self {
            min_gram,
            trailing: TrailingRun::Drop,
        }
    }

    /// Sets how a noun run open at end of stream is handled.
    pub fn with_trailing(mut self, trailing: TrailingRun) -> Self {
        self.trailing = trailing;
        self
    }

    /// Returns the configured min-gram.
    pub fn min_gram(&self) -> MinGram {
        self.min_gram
    }

    /// Returns the configured trailing-run handling.
    pub fn trailing(&self) -> TrailingRun {
        self.trailing
    }

    /// Returns noun phrases from `tokens` followed by English phrases from `text`.
    ///
    /// Duplicates are kept; counting happens downstream.
    pub fn assemble(&self, tokens: &[TaggedToken], text: &str) -> Vec<String> {
        let mut phrases = noun_phrases(tokens, self.min_gram, self.trailing);
        phrases.extend(english_phrases(text, self.min_gram));
        phrases
    }
}
