//! Layered error types
//!
//! Each stage owns a small error enum; [`FolioError`] wraps them for callers
//! that drive the whole pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors, raised before any document is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Window size of zero
    #[error("target_tokens must be greater than 0")]
    ZeroTarget,

    /// Overlap that would never let the window drain
    #[error("overlap_tokens ({overlap}) must be less than target_tokens ({target})")]
    OverlapTooLarge {
        /// Requested overlap
        overlap: usize,
        /// Requested window size
        target: usize,
    },

    /// Thread count of zero given explicitly to the builder
    #[error("threads must be greater than 0")]
    ZeroThreads,

    /// Unknown execution mode name
    #[error("unknown execution mode '{0}' (expected sequential, parallel or adaptive)")]
    UnknownExecutionMode(String),

    /// TOML could not be parsed into the config schema
    #[error("failed to parse configuration{}: {message}", path_suffix(.path))]
    Parse {
        /// Source file, when the TOML came from disk
        path: Option<PathBuf>,
        /// Parser message
        message: String,
    },

    /// Configuration file could not be read
    #[error("failed to read configuration file {path}: {message}")]
    Read {
        /// The file that was requested
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

/// Lexical resource errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// Stopwords or lemma data could not be obtained
    #[error("lexical resource unavailable: {0}")]
    Unavailable(String),

    /// Lexicon TOML did not match the schema
    #[error("invalid lexicon '{name}': {message}")]
    Invalid {
        /// Lexicon code or path
        name: String,
        /// What was wrong
        message: String,
    },
}

/// Line-delimited record errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that is not a valid record
    #[error("malformed record at line {line}: {source}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A record that could not be encoded
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Top-level error for pipeline operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Lexical resources failed to load
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// Record input/output failure
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Worker pool could not be built
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    Parallel(String),
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Record(RecordError::Io(err))
    }
}

/// Result type for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
