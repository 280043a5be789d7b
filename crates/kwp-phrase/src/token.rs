//! Tagged tokens and the tokenizer seam.

use crate::PhraseError;

/// Part-of-speech prefix shared by every noun category (`名詞,一般`, `名詞,固有名詞`, ...).
pub const NOUN_POS_PREFIX: &str = "名詞";

/// A token produced by morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The text of the token as it appears in the input.
    pub surface: String,
    /// Comma-separated part-of-speech tag, most general category first.
    pub part_of_speech: String,
}

impl TaggedToken {
    /// Creates a token from its surface and part-of-speech tag.
    pub fn new(surface: impl Into<String>, part_of_speech: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            part_of_speech: part_of_speech.into(),
        }
    }

    /// Returns true if the token belongs to any noun category.
    pub fn is_noun(&self) -> bool {
        self.part_of_speech.starts_with(NOUN_POS_PREFIX)
    }
}

/// Splits text into part-of-speech tagged tokens.
pub trait Tokenizer {
    /// Tokenizes `text`, returning tokens in input order.
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>, PhraseError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>, PhraseError> {
        (**self).tokenize(text)
    }
}
