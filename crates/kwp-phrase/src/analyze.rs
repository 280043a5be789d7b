//! Per-document analysis.

use crate::{FrequencyTable, MinGram, PhraseAssembler, PhraseError, Tokenizer};

/// Turns the text of one document into a phrase frequency table.
///
/// The tokenizer runs once over the full text; the assembler then combines
/// the noun-run scan over the tokens with the English scan over the text.
pub struct DocumentAnalyzer<T> {
    /// Part-of-speech tagger.
    tokenizer: T,
    /// Phrase assembly settings.
    assembler: PhraseAssembler,
}

impl<T: Tokenizer> DocumentAnalyzer<T> {
    /// Creates an analyzer from a tokenizer and assembly settings.
    pub fn new(tokenizer: T, assembler: PhraseAssembler) -> Self {
        Self {
            tokenizer,
            assembler,
        }
    }

    /// Returns the assembly settings.
    pub fn assembler(&self) -> &PhraseAssembler {
        &self.assembler
    }

    /// Counts the phrases in `text`.
    pub fn analyze(&self, text: &str) -> Result<FrequencyTable, PhraseError> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(self.assembler.assemble(&tokens, text).into_iter().collect())
    }
}

/// Counts the phrases in a single text with default assembly settings.
pub fn analyze_text<T: Tokenizer>(
    tokenizer: &T,
    text: &str,
    min_gram: MinGram,
) -> Result<FrequencyTable, PhraseError> {
    DocumentAnalyzer::new(tokenizer, PhraseAssembler::new(min_gram)).analyze(text)
}
