//! Keyword phrase extraction for mixed Japanese/English text.
//!
//! Text flows through four stages:
//!
//! 1. **Cleaning**: punctuation and `cid` placeholder artifacts are removed
//!    from every surface form ([`clean`]).
//! 2. **Tokenizing**: a [`Tokenizer`] tags each token with its part of speech.
//!    [`LinderaTokenizer`] is the production implementation.
//! 3. **Assembling**: [`PhraseAssembler`] joins runs of Japanese nouns and
//!    fixed-size groups of English words into phrases.
//! 4. **Counting**: phrases are folded into a [`FrequencyTable`], which can be
//!    merged across documents, filtered with [`filter_noise`] and ranked.

#![warn(missing_docs)]

mod analyze;
mod assemble;
mod clean;
mod error;
mod filter;
mod morph;
mod table;
mod token;

pub use analyze::{DocumentAnalyzer, analyze_text};
pub use assemble::{MinGram, PhraseAssembler, TrailingRun, english_phrases, noun_phrases};
pub use clean::clean;
pub use error::PhraseError;
pub use filter::{filter_noise, is_noise};
pub use morph::LinderaTokenizer;
pub use table::{FrequencyTable, RankedPhrase};
pub use token::{NOUN_POS_PREFIX, TaggedToken, Tokenizer};
