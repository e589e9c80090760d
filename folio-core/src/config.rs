//! Configuration for chunking, preprocessing and execution
//!
//! Every section is optional in TOML; missing keys take the defaults below.

use crate::error::ConfigError;
use crate::normalize::Normalizer;
use crate::pipeline::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Coarse tokens per window
    pub const TARGET_TOKENS: usize = 320;

    /// Tokens carried from one window into the next
    pub const OVERLAP_TOKENS: usize = 50;

    /// Minimum batch size (documents) before adaptive mode goes parallel
    pub const PARALLEL_THRESHOLD: usize = 4;
}

/// Window sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Coarse tokens per window
    pub target_tokens: usize,
    /// Trailing tokens repeated at the start of the next window
    pub overlap_tokens: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            target_tokens: defaults::TARGET_TOKENS,
            overlap_tokens: defaults::OVERLAP_TOKENS,
        }
    }
}

impl ChunkConfig {
    /// Create and validate a window configuration
    pub fn new(target_tokens: usize, overlap_tokens: usize) -> Result<Self, ConfigError> {
        let config = Self {
            target_tokens,
            overlap_tokens,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject windows that could never drain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_tokens == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        if self.overlap_tokens >= self.target_tokens {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap_tokens,
                target: self.target_tokens,
            });
        }
        Ok(())
    }
}

/// Normalization and lexical filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Fold text to lowercase
    pub lowercase: bool,
    /// Rejoin words hyphenated across line wraps
    pub fix_hyphenation: bool,
    /// Stopwords added on top of the lexicon's list
    pub extra_stopwords: Vec<String>,
    /// Lexicon file replacing the embedded English lexicon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            fix_hyphenation: true,
            extra_stopwords: Vec::new(),
            lexicon: None,
        }
    }
}

impl PreprocessConfig {
    /// Normalizer carrying these flags
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.lowercase, self.fix_hyphenation)
    }
}

/// Execution strategy over a batch of documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Sequential, parallel or adaptive
    pub execution_mode: ExecutionMode,
    /// Worker threads (0 = all cores)
    pub threads: usize,
    /// Batch size at which adaptive mode switches to parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: 0,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl PerformanceConfig {
    /// Thread count as an option (None = all cores)
    pub fn thread_count(&self) -> Option<usize> {
        (self.threads > 0).then_some(self.threads)
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Window sizing
    #[serde(default)]
    pub chunking: ChunkConfig,

    /// Normalization and filtering
    #[serde(default)]
    pub preprocess: PreprocessConfig,

    /// Execution strategy
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl FolioConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, None)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, Some(path))
    }

    fn parse(toml_str: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: FolioConfig = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chunking.validate()
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: FolioConfig,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: FolioConfig) -> Self {
        Self {
            config,
            threads: None,
        }
    }

    /// Set the window size in coarse tokens
    pub fn target_tokens(mut self, tokens: usize) -> Self {
        self.config.chunking.target_tokens = tokens;
        self
    }

    /// Set the overlap in coarse tokens
    pub fn overlap_tokens(mut self, tokens: usize) -> Self {
        self.config.chunking.overlap_tokens = tokens;
        self
    }

    /// Toggle lowercasing
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.config.preprocess.lowercase = enabled;
        self
    }

    /// Toggle hyphenation repair
    pub fn fix_hyphenation(mut self, enabled: bool) -> Self {
        self.config.preprocess.fix_hyphenation = enabled;
        self
    }

    /// Add stopwords on top of the lexicon
    pub fn extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .preprocess
            .extra_stopwords
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Use a lexicon file instead of the embedded one
    pub fn lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.preprocess.lexicon = Some(path.into());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.performance.execution_mode = mode;
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in documents
    pub fn parallel_threshold(mut self, documents: usize) -> Self {
        self.config.performance.parallel_threshold = documents;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FolioConfig, ConfigError> {
        let mut config = self.config;

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(ConfigError::ZeroThreads);
            }
            config.performance.threads = threads;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.chunking.target_tokens, 320);
        assert_eq!(config.chunking.overlap_tokens, 50);
        assert!(config.preprocess.lowercase);
        assert!(config.preprocess.fix_hyphenation);
        assert!(config.preprocess.extra_stopwords.is_empty());
        assert_eq!(config.performance.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.performance.thread_count(), None);
    }

    #[test]
    fn test_chunk_config_validation() {
        assert!(ChunkConfig::new(10, 9).is_ok());
        assert!(ChunkConfig::new(10, 0).is_ok());
        assert_eq!(ChunkConfig::new(0, 0), Err(ConfigError::ZeroTarget));
        assert_eq!(
            ChunkConfig::new(10, 10),
            Err(ConfigError::OverlapTooLarge {
                overlap: 10,
                target: 10
            })
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FolioConfig::from_toml_str(
            r#"
[chunking]
target_tokens = 100

[preprocess]
extra_stopwords = ["figure", "table"]
"#,
        )
        .unwrap();

        assert_eq!(config.chunking.target_tokens, 100);
        assert_eq!(config.chunking.overlap_tokens, 50);
        assert_eq!(config.preprocess.extra_stopwords, vec!["figure", "table"]);
        assert!(config.preprocess.lowercase);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(FolioConfig::from_toml_str("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let err = FolioConfig::from_toml_str("[chunking]\ntarget_tokens = 20\noverlap_tokens = 30\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::OverlapTooLarge { .. }));

        let err = FolioConfig::from_toml_str("[chunking]\ntarget_tokens = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_execution_mode_from_toml() {
        let config =
            FolioConfig::from_toml_str("[performance]\nexecution_mode = \"sequential\"\nthreads = 2\n")
                .unwrap();
        assert_eq!(config.performance.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.performance.thread_count(), Some(2));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FolioConfig::builder()
            .target_tokens(64)
            .overlap_tokens(8)
            .extra_stopwords(["et", "al"])
            .build()
            .unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(FolioConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_builder_validation() {
        assert_eq!(
            FolioConfig::builder().target_tokens(0).build(),
            Err(ConfigError::ZeroTarget)
        );
        assert_eq!(
            FolioConfig::builder().threads(Some(0)).build(),
            Err(ConfigError::ZeroThreads)
        );

        let config = FolioConfig::builder()
            .threads(Some(3))
            .lowercase(false)
            .fix_hyphenation(false)
            .build()
            .unwrap();
        assert_eq!(config.performance.threads, 3);
        assert_eq!(config.preprocess.normalizer(), Normalizer::new(false, false));
    }

    #[test]
    fn test_from_file_missing() {
        let err = FolioConfig::from_file("/nonexistent/folio.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
