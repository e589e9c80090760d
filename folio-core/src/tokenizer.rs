//! Coarse tokenization used to size chunk windows
//!
//! A coarse token is either a maximal run of word characters (letters,
//! digits, underscore) or a single other non-whitespace character.
//! Whitespace only separates tokens.

use crate::normalize::is_word_char;

/// Iterator over the coarse tokens of a string, borrowing from it
#[derive(Debug, Clone)]
pub struct CoarseTokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> CoarseTokens<'a> {
    /// Start tokenizing `text`
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for CoarseTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let (offset, first) = rest.char_indices().find(|(_, ch)| !ch.is_whitespace())?;
        let start = self.pos + offset;

        let end = if is_word_char(first) {
            self.text[start..]
                .char_indices()
                .find(|(_, ch)| !is_word_char(*ch))
                .map_or(self.text.len(), |(i, _)| start + i)
        } else {
            start + first.len_utf8()
        };

        self.pos = end;
        Some(&self.text[start..end])
    }
}

/// Split `text` into coarse tokens
pub fn tokenize(text: &str) -> CoarseTokens<'_> {
    CoarseTokens::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<&str> {
        tokenize(text).collect()
    }

    #[test]
    fn test_words_and_symbols() {
        assert_eq!(
            toks("Hello, world! x_1=2.5"),
            vec!["Hello", ",", "world", "!", "x_1", "=", "2", ".", "5"]
        );
    }

    #[test]
    fn test_symbol_runs_split_per_char() {
        assert_eq!(toks("a -- b"), vec!["a", "-", "-", "b"]);
        assert_eq!(toks("(…)"), vec!["(", "…", ")"]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(toks("").is_empty());
        assert!(toks(" \n\t  ").is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(toks("café naïve 東京"), vec!["café", "naïve", "東京"]);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        assert_eq!(toks("  one two  "), vec!["one", "two"]);
    }
}
