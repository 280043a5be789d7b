//! Noise filtering for ranked output.
//!
//! Extracted PDF text often contains letter-spaced headings ("A B S T R A C T")
//! and variable lists that the English scan turns into phrases like "A B".
//! Those carry no terminology and are dropped before presentation.

use std::sync::LazyLock;

use regex::Regex;

use crate::FrequencyTable;

/// Single letters separated by whitespace, optionally ending in one more letter.
static SINGLE_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]\s)+[A-Za-z]?$").expect("noise pattern is valid"));

/// Returns true if `phrase` is made only of single letters separated by whitespace.
pub fn is_noise(phrase: &str) -> bool {
    SINGLE_LETTERS.is_match(phrase)
}

/// Returns a copy of `table` without noise phrases. Counts and order are preserved.
pub fn filter_noise(table: &FrequencyTable) -> FrequencyTable {
    let mut filtered = table.clone();
    filtered.retain(|phrase, _| !is_noise(phrase));
    filtered
}
