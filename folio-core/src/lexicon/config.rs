//! TOML schema for lexicon resources

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Identification
    pub metadata: Metadata,
    /// Words dropped by the filter
    pub stopwords: Stopwords,
    /// Lemmatization data, empty when omitted
    #[serde(default)]
    pub lemmas: Lemmas,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short code, e.g. `en`
    pub code: String,
    /// Display name
    pub name: String,
}

/// Stopword list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwords {
    /// Stopwords, matched after lowercasing
    pub words: Vec<String>,
}

/// Lemmatization data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lemmas {
    /// Irregular forms mapped to their lemma
    #[serde(default)]
    pub exceptions: HashMap<String, String>,
    /// Words that are never rewritten
    #[serde(default)]
    pub invariant: Vec<String>,
    /// Word endings that block the suffix rules
    #[serde(default)]
    pub protected_suffixes: Vec<String>,
    /// Suffix rewrite rules, tried in order
    #[serde(default)]
    pub rules: Vec<SuffixRule>,
}

/// `suffix` -> `replace` when at least `min_stem` characters remain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Ending to strip
    pub suffix: String,
    /// Appended after stripping
    #[serde(default)]
    pub replace: String,
    /// Minimum characters left after stripping
    #[serde(default = "default_min_stem")]
    pub min_stem: usize,
}

fn default_min_stem() -> usize {
    2
}

impl LexiconConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("metadata.code cannot be empty".to_string());
        }
        if let Some(rule) = self.lemmas.rules.iter().find(|r| r.suffix.is_empty()) {
            return Err(format!(
                "suffix rule with empty suffix (replace = '{}')",
                rule.replace
            ));
        }
        Ok(())
    }
}
