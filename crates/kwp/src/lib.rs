//! kwp: keyword phrase picker
//!
//! Finds the phrases that recur across a folder of research papers. The
//! leading pages of every PDF are tokenized, runs of Japanese nouns and
//! fixed-size groups of English words are counted, and the most frequent
//! phrases across the whole folder are reported.

#![warn(missing_docs)]

pub mod cli;
