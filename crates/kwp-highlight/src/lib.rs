//! Terminal styling for kwp.
//!
//! [`Highlighter`] colors the TOML shown by `kwp config` and `kwp init` and
//! the JSON printed by `kwp scan --json`. The [`style`] module holds the
//! ANSI helpers used for section titles, warnings and the ranking bars.

#![warn(missing_docs)]

pub mod style;

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

pub use style::{bar, dim, rule, subheader, warning};

/// Colors structured text for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML and JSON.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::with_theme(EmbeddedThemeName::Dracula)
    }
}

impl Highlighter {
    /// Creates a highlighter using the given embedded theme.
    pub fn with_theme(theme: EmbeddedThemeName) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme,
        }
    }

    /// Highlights a configuration file.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights JSON output.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights `content` using the syntax registered for `extension`.
    ///
    /// Unknown extensions fall back to plain text.
    pub fn highlight(&self, content: &str, extension: &str) -> String {
        let syntax = self.syntax(extension);
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(style::RESET);
        output
    }

    /// Looks up a syntax by extension, then by name.
    fn syntax(&self, extension: &str) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(extension)
            .or_else(|| self.syntax_set.find_syntax_by_name(extension))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}
