//! Configuration loading and command-line overrides

use crate::error::CliError;
use anyhow::Result;
use folio_core::{ConfigBuilder, ExecutionMode, FolioConfig};
use std::path::Path;

/// Settings given on the command line, applied over the file configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Window size in coarse tokens
    pub target_tokens: Option<usize>,
    /// Overlap in coarse tokens
    pub overlap_tokens: Option<usize>,
    /// Stopwords added on top of the lexicon
    pub extra_stopwords: Vec<String>,
    /// Worker threads
    pub threads: Option<usize>,
    /// Force parallel execution
    pub parallel: bool,
}

/// Load the configuration file, or defaults when none is given
///
/// A relative `lexicon` path is resolved against the configuration file's
/// directory.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    let Some(path) = path else {
        return Ok(FolioConfig::default());
    };

    let mut config =
        FolioConfig::from_file(path).map_err(|e| CliError::ConfigError(e.to_string()))?;

    if let Some(lexicon) = config.preprocess.lexicon.take() {
        let resolved = match path.parent() {
            Some(dir) if lexicon.is_relative() => dir.join(lexicon),
            _ => lexicon,
        };
        config.preprocess.lexicon = Some(resolved);
    }

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

impl ConfigOverrides {
    /// Apply overrides and re-validate
    pub fn apply(&self, config: FolioConfig) -> Result<FolioConfig> {
        let mut builder = ConfigBuilder::from_config(config)
            .threads(self.threads)
            .extra_stopwords(self.extra_stopwords.iter().cloned());

        if let Some(target) = self.target_tokens {
            builder = builder.target_tokens(target);
        }
        if let Some(overlap) = self.overlap_tokens {
            builder = builder.overlap_tokens(overlap);
        }
        if self.parallel {
            builder = builder.execution_mode(ExecutionMode::Parallel);
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
