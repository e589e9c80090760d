//! Text normalization
//!
//! Folds case, rejoins words broken across line wraps, and strips URLs,
//! e-mail addresses, author-year citations and "et al." mentions before
//! collapsing whitespace. The steps run in a fixed order; moving any of them
//! changes the output.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

const URL_PATTERN: &str = r"(https?://\S+|www\.\S+)";
const EMAIL_PATTERN: &str = r"\b[\w\.-]+@[\w\.-]+\.\w+\b";
const ETAL_PATTERN: &str = r"(?i)\b([a-z][a-z\-]+)\s+et\s+al\.?\b";

/// Surname: a letter followed by at least one letter or hyphen
const SURNAME: &str = r"[a-z][a-z\-]+";
/// Joins surnames inside one author group
const JOINER: &str = r"(?:\s*&\s*|\s*,\s*|\s+and\s+)";

struct Patterns {
    url: Regex,
    email: Regex,
    citation: Regex,
    etal: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        url: Regex::new(URL_PATTERN).expect("URL pattern is valid"),
        email: Regex::new(EMAIL_PATTERN).expect("e-mail pattern is valid"),
        citation: Regex::new(&citation_pattern()).expect("citation pattern is valid"),
        etal: Regex::new(ETAL_PATTERN).expect("et al. pattern is valid"),
    })
}

/// `(author-group, year[; author-group, year]*)`
///
/// Whitespace is tolerated just inside the parentheses so that citations
/// survive being re-joined from coarse tokens (`( smith , 2019 )`).
fn citation_pattern() -> String {
    let group = format!(r"(?:{SURNAME}{JOINER})*{SURNAME}\s*,\s*\d{{4}}[a-z]?");
    format!(r"(?i)\(\s*{group}(?:\s*;\s*{group})*\s*\)")
}

/// Cleans raw text into a canonical single-spaced string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    /// Fold to lowercase first
    pub lowercase: bool,
    /// Rejoin `word- word` hyphenation artifacts
    pub fix_hyphenation: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            fix_hyphenation: true,
        }
    }
}

impl Normalizer {
    /// Create a normalizer with explicit flags
    pub fn new(lowercase: bool, fix_hyphenation: bool) -> Self {
        Self {
            lowercase,
            fix_hyphenation,
        }
    }

    /// Run the full cleaning pipeline over `text`
    pub fn normalize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let p = patterns();

        let mut txt: Cow<'_, str> = if self.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };
        if self.fix_hyphenation {
            txt = Cow::Owned(rejoin_hyphenated(&txt));
        }

        let txt = p.url.replace_all(&txt, " ");
        let txt = p.email.replace_all(&txt, " ");
        let txt = p.citation.replace_all(&txt, " ");
        let txt = p.etal.replace_all(&txt, " ");

        collapse_whitespace(&txt)
    }
}

/// Normalize with explicit flags
pub fn normalize(text: &str, lowercase: bool, fix_hyphenation: bool) -> String {
    Normalizer::new(lowercase, fix_hyphenation).normalize(text)
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Drop `-` plus the whitespace after it when both sides are word characters
fn rejoin_hyphenated(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '-' && i > 0 && is_word_char(chars[i - 1]) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && is_word_char(chars[j]) {
                i = j;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }

    out
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        Normalizer::default().normalize(text)
    }

    #[test]
    fn test_citation_stripping() {
        assert_eq!(
            clean("Result (Smith & Jones, 2019) shows gains (Lee, 2020a; Park, 2021) here."),
            "result shows gains here."
        );
    }

    #[test]
    fn test_multi_group_citation_with_short_surname() {
        assert_eq!(
            clean("as shown (smith & jones, 2019; lee, 2021a) before"),
            "as shown before"
        );
    }

    #[test]
    fn test_citation_in_coarse_token_spacing() {
        assert_eq!(
            clean("results ( smith & jones , 2019 ) show ( lee , 2020a ; park , 2021 ) it"),
            "results show it"
        );
    }

    #[test]
    fn test_citation_joiners() {
        assert_eq!(clean("x (Brown and Green, 2018) y"), "x y");
        assert_eq!(clean("x (Brown, Green, White, 2018b) y"), "x y");
        assert_eq!(clean("x (van-dyke, 2001) y"), "x y");
    }

    #[test]
    fn test_adjacent_citations_removed_independently() {
        assert_eq!(clean("a (Lee, 2020)(Kim, 2019) b"), "a b");
    }

    #[test]
    fn test_parenthetical_without_year_untouched() {
        assert_eq!(clean("See the (bracketed) note."), "see the (bracketed) note.");
    }

    #[test]
    fn test_two_digit_year_does_not_match() {
        assert_eq!(clean("a (Smith, 19) b"), "a (smith, 19) b");
        assert_eq!(clean("a (Smith, 20190) b"), "a (smith, 20190) b");
    }

    #[test]
    fn test_citation_case_insensitive_without_lowercasing() {
        assert_eq!(
            normalize("Gains (Smith & Jones, 2019) here", false, true),
            "Gains here"
        );
    }

    #[test]
    fn test_hyphenation_rejoined() {
        assert_eq!(clean("hyphen- ated words"), "hyphenated words");
        assert_eq!(clean("multi-\nline"), "multiline");
        assert_eq!(clean("a- b- c"), "abc");
    }

    #[test]
    fn test_hyphenation_keeps_real_hyphens() {
        assert_eq!(clean("well-known fact"), "well-known fact");
        assert_eq!(clean("range - wide"), "range - wide");
    }

    #[test]
    fn test_hyphenation_disabled() {
        assert_eq!(normalize("hyphen- ated", true, false), "hyphen- ated");
    }

    #[test]
    fn test_urls_and_emails_removed() {
        assert_eq!(
            clean("visit https://example.org/path?q=1 or www.test.com now"),
            "visit or now"
        );
        assert_eq!(clean("contact jane.doe@uni.edu today"), "contact today");
    }

    #[test]
    fn test_et_al_removed() {
        assert_eq!(clean("as Smith et al found"), "as found");
        // The period stays unless a word character follows it
        assert_eq!(clean("as Smith et al. found"), "as . found");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean("  many\t\tspaces \n here  "), "many spaces here");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t "), "");
    }

    #[test]
    fn test_lowercase_flag() {
        assert_eq!(normalize("Mixed Case", false, true), "Mixed Case");
        assert_eq!(normalize("Mixed Case", true, true), "mixed case");
    }
}
