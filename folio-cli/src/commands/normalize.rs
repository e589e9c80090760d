//! Normalize command implementation

use super::init_logging;
use crate::config::load_config;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use folio_core::{LexicalFilter, Lexicon, Normalizer};
use std::path::{Path, PathBuf};

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize (default: read standard input)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Keep the original letter case
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave `word- word` line-wrap hyphenation untouched
    #[arg(long)]
    pub keep_hyphenation: bool,

    /// Print filtered lemma tokens instead of normalized text
    #[arg(short, long)]
    pub tokens: bool,

    /// Configuration file (lexicon and extra stopwords for --tokens)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let text = match &self.text {
            Some(text) => text.clone(),
            None => FileReader::read_text(Path::new("-"))?,
        };

        println!("{}", self.render(&text)?);
        Ok(())
    }

    fn normalizer(&self) -> Normalizer {
        Normalizer::new(!self.no_lowercase, !self.keep_hyphenation)
    }

    fn render(&self, text: &str) -> Result<String> {
        if !self.tokens {
            return Ok(self.normalizer().normalize(text));
        }

        let config = load_config(self.config.as_deref())?;
        let lexicon = match &config.preprocess.lexicon {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::english()?,
        }
        .with_extra_stopwords(&config.preprocess.extra_stopwords);

        let filter = LexicalFilter::with_lexicon(self.normalizer(), &lexicon);
        Ok(filter.filter(text).join(" "))
    }
}
