//! Error types for phrase extraction.

use thiserror::Error;

/// Errors that can occur while extracting phrases.
#[derive(Debug, Error)]
pub enum PhraseError {
    /// Min-gram must be a positive integer.
    #[error("min-gram must be a positive integer, got {0}")]
    InvalidMinGram(usize),

    /// The morphological analyzer failed to load or to tokenize.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}
