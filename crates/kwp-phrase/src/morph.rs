//! Morphological analysis backed by Lindera and the embedded IPADIC dictionary.

use lindera::{
    dictionary::load_dictionary, mode::Mode, segmenter::Segmenter,
    tokenizer::Tokenizer as Lindera,
};

use crate::{PhraseError, TaggedToken, Tokenizer};

/// Location of the IPADIC dictionary compiled into the binary.
const IPADIC: &str = "embedded://ipadic";

/// Number of IPADIC detail fields that make up the part-of-speech tag.
const POS_FIELDS: usize = 4;

/// Japanese tokenizer using Lindera in normal segmentation mode.
///
/// Whitespace is kept as `記号,空白` tokens so that spaces, line breaks and
/// the separator between pages end a noun run.
pub struct LinderaTokenizer {
    /// Underlying Lindera tokenizer.
    inner: Lindera,
}

impl LinderaTokenizer {
    /// Loads the embedded IPADIC dictionary.
    pub fn new() -> Result<Self, PhraseError> {
        let dictionary =
            load_dictionary(IPADIC).map_err(|e| PhraseError::Tokenizer(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None).keep_whitespace(true);
        Ok(Self {
            inner: Lindera::new(segmenter),
        })
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedToken>, PhraseError> {
        let mut tokens = self
            .inner
            .tokenize(text)
            .map_err(|e| PhraseError::Tokenizer(e.to_string()))?;

        Ok(tokens
            .iter_mut()
            .map(|token| {
                let surface = token.surface.to_string();
                let part_of_speech = token
                    .details()
                    .into_iter()
                    .take(POS_FIELDS)
                    .collect::<Vec<_>>()
                    .join(",");
                TaggedToken {
                    surface,
                    part_of_speech,
                }
            })
            .collect())
    }
}
