//! Page-aware chunking and lexical preprocessing for document corpora
//!
//! Page-segmented documents are cut into fixed-size, overlapping windows of
//! coarse tokens that remember which pages they span. Each window's text is
//! then normalized (citations, URLs, e-mails and hyphenation artifacts
//! removed) and reduced to stopword-filtered lemmas for downstream topic
//! modeling.
//!
//! # Example
//!
//! ```rust
//! use folio_core::{chunk_pages, filter_tokens, Document, Lexicon, PageRecord};
//!
//! let doc = Document::new(
//!     "report",
//!     vec![
//!         PageRecord::new(1, "Topic models (Blei & Lafferty, 2007) summarize corpora."),
//!         PageRecord::new(2, "Overlapping windows keep local context."),
//!     ],
//! );
//!
//! let chunks = chunk_pages(&doc, 8, 2).unwrap();
//! assert_eq!(chunks[0].start_page, 1);
//!
//! let lexicon = Lexicon::english().unwrap();
//! let tokens = filter_tokens(&chunks[0].text, &lexicon, &lexicon);
//! assert!(tokens.contains(&"topic".to_string()));
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod error;
pub mod filter;
pub mod io;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use chunker::{chunk_pages, PageChunker};
pub use config::{ChunkConfig, ConfigBuilder, FolioConfig, PerformanceConfig, PreprocessConfig};
pub use error::{ConfigError, FolioError, LexiconError, RecordError, Result};
pub use filter::{filter_tokens, LexicalFilter};
pub use lexicon::{Lemmatizer, Lexicon, StopwordSet};
pub use normalize::{normalize, Normalizer};
pub use pipeline::{ExecutionMode, Pipeline, PipelineOutput, ProcessingMetadata};
pub use tokenizer::tokenize;
pub use types::{Chunk, Document, PageRecord};
