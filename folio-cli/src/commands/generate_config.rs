//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use folio_core::config::defaults;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Write a lexicon template with this code instead of a pipeline config
    #[arg(short = 'l', long, value_name = "CODE")]
    pub lexicon: Option<String>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let (kind, template) = match &self.lexicon {
            Some(code) => ("lexicon", lexicon_template(code)),
            None => ("configuration", config_template()),
        };

        println!("Generating {kind} template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to suit your corpus");
        println!("2. Validate it:");
        match &self.lexicon {
            Some(_) => println!("   folio validate --lexicon {}", self.output.display()),
            None => println!("   folio validate -c {}", self.output.display()),
        }

        Ok(())
    }
}

/// Commented pipeline configuration with default values
fn config_template() -> String {
    format!(
        r#"# folio pipeline configuration

[chunking]
# Coarse tokens (words and punctuation marks) per chunk
target_tokens = {target}
# Tokens repeated at the start of the next chunk; must be below target_tokens
overlap_tokens = {overlap}

[preprocess]
# Fold text to lowercase before filtering
lowercase = true
# Rejoin words split across line wraps ("hyphen- ated" -> "hyphenated")
fix_hyphenation = true
# Corpus-specific stopwords added to the lexicon's list
extra_stopwords = []
# Lexicon file replacing the built-in English stopwords and lemma rules
# (relative paths resolve against this file's directory)
# lexicon = "lexicon.toml"

[performance]
# sequential | parallel | adaptive
execution_mode = "adaptive"
# Worker threads, 0 = all cores
threads = 0
# Documents per batch before adaptive mode goes parallel
parallel_threshold = {threshold}
"#,
        target = defaults::TARGET_TOKENS,
        overlap = defaults::OVERLAP_TOKENS,
        threshold = defaults::PARALLEL_THRESHOLD,
    )
}

/// Lexicon skeleton with a handful of entries per section
fn lexicon_template(code: &str) -> String {
    format!(
        r#"# Lexicon for {code}

[metadata]
code = "{code}"
name = "Custom Lexicon"

[stopwords]
# Compared against lowercased words before lemmatization
words = ["a", "an", "and", "the", "of", "to", "in", "is", "are", "was", "were"]

[lemmas]
# Words that are never rewritten
invariant = ["series", "species"]

# Endings that block the suffix rules below
protected_suffixes = ["ss", "us", "is"]

# Tried in order; the first suffix that matches with at least
# min_stem characters left over wins
rules = [
    {{ suffix = "ies", replace = "y", min_stem = 2 }},
    {{ suffix = "s", replace = "", min_stem = 3 }},
]

# Irregular forms, checked before any rule
[lemmas.exceptions]
children = "child"
mice = "mouse"
"#
    )
}
