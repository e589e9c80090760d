//! Lexical filtering of chunk text into lemma tokens

use crate::{
    lexicon::{Lemmatizer, StopwordSet},
    normalize::Normalizer,
    types::Chunk,
};
use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;

/// Tokens of two characters or fewer are dropped
const MIN_TOKEN_CHARS: usize = 3;

static CANDIDATE: OnceLock<Regex> = OnceLock::new();

fn candidate_pattern() -> &'static Regex {
    CANDIDATE.get_or_init(|| Regex::new(r"[a-z][a-z'\-]*").expect("candidate pattern is valid"))
}

/// Split a candidate into its runs of plain lowercase letters
///
/// `"state-of-the-art"` becomes `state`, `of`, `the`, `art`; a candidate with
/// no letter run is returned whole.
pub fn split_glued(candidate: &str) -> SmallVec<[&str; 4]> {
    let parts: SmallVec<[&str; 4]> = candidate
        .split(|ch: char| !ch.is_ascii_lowercase())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        SmallVec::from_elem(candidate, 1)
    } else {
        parts
    }
}

/// Normalizes text and reduces it to filtered lemmas
#[derive(Clone, Copy)]
pub struct LexicalFilter<'a> {
    normalizer: Normalizer,
    stopwords: &'a dyn StopwordSet,
    lemmatizer: &'a dyn Lemmatizer,
}

impl std::fmt::Debug for LexicalFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalFilter")
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}

impl<'a> LexicalFilter<'a> {
    /// Filter with separate stopword and lemma capabilities
    pub fn new(
        normalizer: Normalizer,
        stopwords: &'a dyn StopwordSet,
        lemmatizer: &'a dyn Lemmatizer,
    ) -> Self {
        Self {
            normalizer,
            stopwords,
            lemmatizer,
        }
    }

    /// Filter backed by one resource providing both capabilities
    pub fn with_lexicon<L>(normalizer: Normalizer, lexicon: &'a L) -> Self
    where
        L: StopwordSet + Lemmatizer,
    {
        Self::new(normalizer, lexicon, lexicon)
    }

    /// Reduce `text` to lemmas in order of appearance, duplicates kept
    pub fn filter(&self, text: &str) -> Vec<String> {
        let clean = self.normalizer.normalize(text);

        candidate_pattern()
            .find_iter(&clean)
            .flat_map(|m| split_glued(m.as_str()))
            .filter(|word| self.keep(word))
            .map(|word| self.lemmatizer.lemmatize(word).into_owned())
            .collect()
    }

    /// Attach filtered tokens to a chunk
    pub fn apply(&self, chunk: &mut Chunk) {
        chunk.tokens = Some(self.filter(&chunk.text));
    }

    fn keep(&self, word: &str) -> bool {
        word.chars().count() >= MIN_TOKEN_CHARS
            && !word.chars().any(char::is_numeric)
            && !self.stopwords.is_stopword(word)
    }
}

/// Filter `text` with default normalization
pub fn filter_tokens(
    text: &str,
    stopwords: &dyn StopwordSet,
    lemmatizer: &dyn Lemmatizer,
) -> Vec<String> {
    LexicalFilter::new(Normalizer::default(), stopwords, lemmatizer).filter(text)
}
