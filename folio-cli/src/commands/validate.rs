//! Validate command implementation

use crate::config::load_config;
use anyhow::Result;
use clap::Args;
use folio_core::{FolioConfig, Lexicon};
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Pipeline configuration file to validate
    #[arg(short, long, value_name = "FILE", required_unless_present = "lexicon")]
    pub config: Option<PathBuf>,

    /// Lexicon file to validate
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.config {
            self.validate_config(path)?;
        }
        if let Some(path) = &self.lexicon {
            validate_lexicon(path)?;
        }
        Ok(())
    }

    fn validate_config(&self, path: &Path) -> Result<()> {
        println!("Validating configuration: {}", path.display());

        let config = match load_config(Some(path)) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        println!("✓ Configuration is valid!");
        print_summary(&config);

        // A lexicon named by the config is checked unless given explicitly
        if let (Some(lexicon), None) = (&config.preprocess.lexicon, &self.lexicon) {
            validate_lexicon(lexicon)?;
        }
        Ok(())
    }
}

fn print_summary(config: &FolioConfig) {
    println!(
        "  Chunking: {} tokens, {} overlap",
        config.chunking.target_tokens, config.chunking.overlap_tokens
    );
    println!(
        "  Execution: {} (threshold {} documents)",
        config.performance.execution_mode, config.performance.parallel_threshold
    );
}

fn validate_lexicon(path: &Path) -> Result<()> {
    println!("Validating lexicon: {}", path.display());

    match Lexicon::from_file(path) {
        Ok(lexicon) => {
            println!("✓ Lexicon is valid!");
            println!("  Code: {}", lexicon.code());
            println!("  Name: {}", lexicon.name());
            println!("  Stopwords: {}", lexicon.stopword_count());
            Ok(())
        }
        Err(e) => {
            println!("✗ Lexicon is invalid!");
            println!("  Error: {e}");
            Err(anyhow::anyhow!("Validation failed: {}", e))
        }
    }
}
