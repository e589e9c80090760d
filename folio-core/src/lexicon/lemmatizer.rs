//! Dictionary-free lemmatizer
//!
//! Lookup order: exception table, invariant words, then the first suffix
//! rule that applies. Words matching none are returned unchanged, so verbs
//! and adjectives pass through the noun-oriented rules untouched.

use super::config::{Lemmas, SuffixRule};
use super::Lemmatizer;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Lemmatizer driven by exception tables and ordered suffix rules
#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer {
    exceptions: HashMap<String, String>,
    invariant: HashSet<String>,
    protected_suffixes: Vec<String>,
    rules: Vec<SuffixRule>,
}

impl RuleLemmatizer {
    /// Build from lexicon lemma data
    pub fn from_config(lemmas: &Lemmas) -> Self {
        Self {
            exceptions: lemmas.exceptions.clone(),
            invariant: lemmas.invariant.iter().cloned().collect(),
            protected_suffixes: lemmas.protected_suffixes.clone(),
            rules: lemmas.rules.clone(),
        }
    }

    fn apply_rules(&self, word: &str) -> Option<String> {
        if self
            .protected_suffixes
            .iter()
            .any(|suffix| word.ends_with(suffix.as_str()))
        {
            return None;
        }

        self.rules.iter().find_map(|rule| {
            let stem = word.strip_suffix(rule.suffix.as_str())?;
            (stem.chars().count() >= rule.min_stem).then(|| format!("{stem}{}", rule.replace))
        })
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = self.exceptions.get(word) {
            return Cow::Owned(lemma.clone());
        }
        if self.invariant.contains(word) {
            return Cow::Borrowed(word);
        }
        match self.apply_rules(word) {
            Some(lemma) => Cow::Owned(lemma),
            None => Cow::Borrowed(word),
        }
    }
}
