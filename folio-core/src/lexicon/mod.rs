//! Lexical resources: stopwords and lemmatization
//!
//! The filter only sees the [`StopwordSet`] and [`Lemmatizer`] capabilities.
//! [`Lexicon`] implements both from a TOML resource; callers build one once
//! and share it by reference across documents and threads.

pub mod config;
pub mod lemmatizer;
pub mod loader;

use crate::error::LexiconError;
use config::LexiconConfig;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

pub use lemmatizer::RuleLemmatizer;

/// Stopword membership test
pub trait StopwordSet: Send + Sync {
    /// Whether `word` should be dropped
    fn is_stopword(&self, word: &str) -> bool;
}

/// Maps a word to its base form
pub trait Lemmatizer: Send + Sync {
    /// Lemma of `word`, borrowing when unchanged
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

impl StopwordSet for HashSet<String> {
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl StopwordSet for HashSet<&str> {
    fn is_stopword(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Stopword set plus lemmatizer loaded from a lexicon resource
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    stopwords: HashSet<String>,
    lemmatizer: RuleLemmatizer,
}

impl Lexicon {
    /// The embedded English lexicon
    pub fn english() -> Result<Self, LexiconError> {
        let config = loader::embedded("en")?;
        Self::from_config(config)
    }

    /// Load a lexicon TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let config = loader::load_file(path.as_ref())?;
        Self::from_config(&config)
    }

    /// Load from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LexiconError> {
        let config = loader::parse("<inline>", toml_str)?;
        Self::from_config(&config)
    }

    /// Build from a parsed configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        config.validate().map_err(|message| LexiconError::Invalid {
            name: config.metadata.code.clone(),
            message,
        })?;

        let mut stopwords = HashSet::with_capacity(config.stopwords.words.len());
        for word in &config.stopwords.words {
            let word = word.trim().to_lowercase();
            if !word.is_empty() && !stopwords.insert(word.clone()) {
                log::warn!(
                    "duplicate stopword '{word}' in lexicon '{}'",
                    config.metadata.code
                );
            }
        }

        if stopwords.is_empty() {
            return Err(LexiconError::Unavailable(format!(
                "lexicon '{}' has no stopwords",
                config.metadata.code
            )));
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            stopwords,
            lemmatizer: RuleLemmatizer::from_config(&config.lemmas),
        })
    }

    /// Add caller-supplied stopwords (lowercased)
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// Lexicon code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable lexicon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stopwords, including extras
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

impl StopwordSet for Lexicon {
    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Lemmatizer for Lexicon {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.lemmatizer.lemmatize(word)
    }
}
