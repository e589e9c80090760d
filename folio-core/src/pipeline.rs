//! Batch orchestration: chunking then lexical filtering
//!
//! Documents are independent units of work. In parallel mode each document
//! is chunked and filtered on a rayon worker, and results are reassembled in
//! input order, so output never depends on the execution mode.

use crate::{
    chunker::PageChunker,
    config::{FolioConfig, PerformanceConfig},
    error::{ConfigError, Result},
    filter::LexicalFilter,
    lexicon::Lexicon,
    normalize::Normalizer,
    types::{Chunk, Document},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One document after another on the calling thread
    Sequential,
    /// Documents spread over a worker pool
    Parallel,
    /// Parallel once the batch reaches the configured threshold
    #[default]
    Adaptive,
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            "adaptive" => Ok(ExecutionMode::Adaptive),
            other => Err(ConfigError::UnknownExecutionMode(other.to_string())),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        };
        f.write_str(name)
    }
}

/// Resolve adaptive mode for a batch of `documents`
pub fn auto_select(documents: usize, threshold: usize) -> ExecutionMode {
    if documents < 2 || documents < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Documents processed
    pub documents: usize,
    /// Chunks emitted
    pub chunks: usize,
    /// Wall-clock time in milliseconds
    pub processing_time_ms: f64,
}

/// Chunks plus metadata about the run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Chunks in document order, then emission order
    pub chunks: Vec<Chunk>,
    /// Run statistics
    pub metadata: ProcessingMetadata,
}

/// Chunker, normalizer and lexicon configured for one run
#[derive(Debug, Clone)]
pub struct Pipeline {
    chunker: PageChunker,
    normalizer: Normalizer,
    lexicon: Lexicon,
    performance: PerformanceConfig,
}

impl Pipeline {
    /// Build from configuration, loading the configured lexicon
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let lexicon = match &config.preprocess.lexicon {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::english()?,
        };
        Self::with_lexicon(config, lexicon)
    }

    /// Build from configuration with an already loaded lexicon
    ///
    /// `extra_stopwords` from the configuration are added to `lexicon`.
    pub fn with_lexicon(config: &FolioConfig, lexicon: Lexicon) -> Result<Self> {
        config.validate()?;
        let lexicon = lexicon.with_extra_stopwords(&config.preprocess.extra_stopwords);

        log::debug!(
            "pipeline: target={} overlap={} lexicon={} ({} stopwords)",
            config.chunking.target_tokens,
            config.chunking.overlap_tokens,
            lexicon.code(),
            lexicon.stopword_count()
        );

        Ok(Self {
            chunker: PageChunker::new(config.chunking)?,
            normalizer: config.preprocess.normalizer(),
            lexicon,
            performance: config.performance,
        })
    }

    /// The chunker in use
    pub fn chunker(&self) -> &PageChunker {
        &self.chunker
    }

    /// The lexicon in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// A lexical filter borrowing this pipeline's lexicon
    pub fn filter(&self) -> LexicalFilter<'_> {
        LexicalFilter::with_lexicon(self.normalizer, &self.lexicon)
    }

    /// Mode that will be used for a batch of `documents`
    pub fn resolve_mode(&self, documents: usize) -> ExecutionMode {
        match self.performance.execution_mode {
            ExecutionMode::Adaptive => {
                auto_select(documents, self.performance.parallel_threshold)
            }
            mode => mode,
        }
    }

    /// Chunk one document and attach filtered tokens
    pub fn process_document(&self, doc: &Document) -> Vec<Chunk> {
        let filter = self.filter();
        let mut chunks = self.chunker.chunk(doc);
        for chunk in &mut chunks {
            filter.apply(chunk);
        }
        chunks
    }

    /// Chunk documents without filtering
    pub fn chunk_documents(&self, docs: &[Document]) -> Result<PipelineOutput> {
        self.run_per_document(docs, |doc| self.chunker.chunk(doc))
    }

    /// Chunk and filter documents
    pub fn process_documents(&self, docs: &[Document]) -> Result<PipelineOutput> {
        self.run_per_document(docs, |doc| self.process_document(doc))
    }

    /// Attach tokens to already chunked records, in place
    pub fn filter_chunks(&self, chunks: &mut [Chunk]) -> Result<ExecutionMode> {
        let mode = self.resolve_mode(chunks.len());
        let filter = self.filter();

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                self.thread_pool()?
                    .install(|| chunks.par_iter_mut().for_each(|chunk| filter.apply(chunk)));
            }
            _ => chunks.iter_mut().for_each(|chunk| filter.apply(chunk)),
        }

        Ok(mode)
    }

    fn run_per_document<F>(&self, docs: &[Document], work: F) -> Result<PipelineOutput>
    where
        F: Fn(&Document) -> Vec<Chunk> + Send + Sync,
    {
        let start = Instant::now();
        let mode = self.resolve_mode(docs.len());

        let per_doc: Vec<Vec<Chunk>> = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self
                .thread_pool()?
                .install(|| docs.par_iter().map(&work).collect()),
            _ => docs.iter().map(&work).collect(),
        };

        let chunks: Vec<Chunk> = per_doc.into_iter().flatten().collect();
        let metadata = ProcessingMetadata {
            execution_mode: mode,
            documents: docs.len(),
            chunks: chunks.len(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        log::info!(
            "processed {} documents into {} chunks ({} mode, {:.1} ms)",
            metadata.documents,
            metadata.chunks,
            metadata.execution_mode,
            metadata.processing_time_ms
        );

        Ok(PipelineOutput { chunks, metadata })
    }

    #[cfg(feature = "parallel")]
    fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let threads = self
            .performance
            .thread_count()
            .unwrap_or_else(num_cpus::get);

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| crate::error::FolioError::Parallel(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageRecord;

    fn config(mode: ExecutionMode) -> FolioConfig {
        FolioConfig::builder()
            .target_tokens(6)
            .overlap_tokens(2)
            .execution_mode(mode)
            .threads(Some(2))
            .build()
            .unwrap()
    }

    fn corpus() -> Vec<Document> {
        (0..5)
            .map(|d| {
                Document::new(
                    format!("doc {d}"),
                    vec![
                        PageRecord::new(1, format!("Models of topic {d} were studied.")),
                        PageRecord::new(2, "The children ran faster than expected."),
                    ],
                )
                .with_id(format!("doc-{d}"))
            })
            .collect()
    }

    #[test]
    fn test_execution_mode_parsing() {
        assert_eq!("Parallel".parse::<ExecutionMode>().unwrap(), ExecutionMode::Parallel);
        assert_eq!(ExecutionMode::Sequential.to_string(), "sequential");
        assert!(matches!(
            "turbo".parse::<ExecutionMode>(),
            Err(ConfigError::UnknownExecutionMode(_))
        ));
    }

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(1, 0), ExecutionMode::Sequential);
        assert_eq!(auto_select(3, 4), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(8, 4), ExecutionMode::Parallel);
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let docs = corpus();
        let seq = Pipeline::from_config(&config(ExecutionMode::Sequential))
            .unwrap()
            .process_documents(&docs)
            .unwrap();
        let par = Pipeline::from_config(&config(ExecutionMode::Parallel))
            .unwrap()
            .process_documents(&docs)
            .unwrap();

        assert_eq!(seq.chunks, par.chunks);
        assert_eq!(seq.metadata.execution_mode, ExecutionMode::Sequential);
        assert_eq!(seq.metadata.documents, 5);
        assert_eq!(seq.metadata.chunks, seq.chunks.len());
    }

    #[test]
    fn test_chunks_keep_document_order() {
        let docs = corpus();
        let output = Pipeline::from_config(&config(ExecutionMode::Parallel))
            .unwrap()
            .chunk_documents(&docs)
            .unwrap();

        let ids: Vec<&str> = output
            .chunks
            .iter()
            .filter_map(|c| c.pdf_id.as_deref())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(output.chunks.iter().all(|c| c.tokens.is_none()));
    }

    #[test]
    fn test_process_document_filters_and_lemmatizes() {
        let pipeline = Pipeline::from_config(&config(ExecutionMode::Sequential)).unwrap();
        let doc = Document::new(
            "t",
            vec![PageRecord::new(1, "The children studied the models")],
        );
        let chunks = pipeline.process_document(&doc);

        let tokens: Vec<String> = chunks
            .iter()
            .flat_map(|c| c.tokens.clone().unwrap_or_default())
            .collect();
        assert_eq!(tokens, vec!["child", "studied", "model"]);
    }

    #[test]
    fn test_extra_stopwords_applied() {
        let config = FolioConfig::builder()
            .extra_stopwords(["models"])
            .build()
            .unwrap();
        let pipeline = Pipeline::from_config(&config).unwrap();
        assert!(pipeline.filter().filter("models matter").iter().all(|t| t != "model"));
    }

    #[test]
    fn test_filter_chunks_in_place() {
        let pipeline = Pipeline::from_config(&config(ExecutionMode::Adaptive)).unwrap();
        let mut chunks = vec![
            Chunk::new(1, 1, "Growth rates"),
            Chunk::new(1, 2, "of the economies"),
        ];
        pipeline.filter_chunks(&mut chunks).unwrap();

        assert_eq!(
            chunks[0].tokens.as_deref(),
            Some(&["growth".to_string(), "rate".to_string()][..])
        );
        assert_eq!(
            chunks[1].tokens.as_deref(),
            Some(&["economy".to_string()][..])
        );
    }

    #[test]
    fn test_missing_lexicon_file_fails() {
        let config = FolioConfig::builder()
            .lexicon("/nonexistent/lexicon.toml")
            .build()
            .unwrap();
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(crate::error::FolioError::Lexicon(
                crate::error::LexiconError::Unavailable(_)
            ))
        ));
    }
}
