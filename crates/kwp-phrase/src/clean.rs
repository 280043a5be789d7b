//! Surface-form cleaning.
//!
//! PDF text extraction leaves punctuation glued to words and emits `(cid:NN)`
//! placeholders for glyphs it cannot map. Both are removed before a surface
//! takes part in a phrase. The same rule applies to Japanese token surfaces
//! and English words.

use std::sync::LazyLock;

use regex::Regex;

/// Characters removed from every surface.
const DENYLIST: &[char] = &[
    // ASCII punctuation and symbols
    ',', '.', '(', ')', '<', '>', ';', ':', '{', '}', '[', ']', '"', '\'', '`', '~', '!', '@',
    '#', '$', '%', '^', '&', '*', '_', '|', '+', '=', '/', '?', '-',
    // Japanese and full-width punctuation
    '》', '《', '。', '、', '「', '」', '『', '』', '（', '）', '【', '】', '・', '！', '？', '：',
    '；',
];

/// Standalone `cid` placeholder, any case.
static ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcid\b").expect("artifact pattern is valid"));

/// Returns `text` with denylisted characters and `cid` artifacts removed.
///
/// Cleaning is idempotent: `clean(&clean(s)) == clean(s)`.
pub fn clean(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !DENYLIST.contains(c)).collect();
    ARTIFACT.replace_all(&stripped, "").into_owned()
}
