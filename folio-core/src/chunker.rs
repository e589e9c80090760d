//! Page-aware sliding-window chunking
//!
//! Coarse tokens from every page are appended to a single buffer. When the
//! buffer reaches `target_tokens` it is emitted as a [`Chunk`] and all but
//! its last `overlap_tokens` tokens are dropped. The start page is cleared at
//! each emission and set again by the next token appended, so a window that
//! opens with overlap from an earlier page reports the later page.

use crate::{
    config::ChunkConfig,
    error::ConfigError,
    tokenizer::tokenize,
    types::{Chunk, Document},
};

/// Splits documents into overlapping coarse-token windows
#[derive(Debug, Clone, Copy)]
pub struct PageChunker {
    config: ChunkConfig,
}

impl PageChunker {
    /// Create a chunker, rejecting windows that could never drain
    pub fn new(config: ChunkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Window configuration in use
    pub fn config(&self) -> ChunkConfig {
        self.config
    }

    /// Chunk a document in page order
    pub fn chunk(&self, doc: &Document) -> Vec<Chunk> {
        let ChunkConfig {
            target_tokens,
            overlap_tokens,
        } = self.config;

        let mut chunks = Vec::new();
        let mut buffer: Vec<&str> = Vec::with_capacity(target_tokens);
        let mut start_page: Option<u32> = None;

        for page in &doc.pages {
            for token in tokenize(&page.text) {
                let start = *start_page.get_or_insert(page.page);
                buffer.push(token);

                if buffer.len() >= target_tokens {
                    chunks.push(self.emit(doc, start, page.page, &buffer));
                    buffer = buffer.split_off(buffer.len() - overlap_tokens);
                    start_page = None;
                }
            }
        }

        // A buffer holding only carried overlap is already inside the last chunk
        if let (Some(start), Some(last_page)) = (start_page, doc.last_page()) {
            chunks.push(self.emit(doc, start, last_page, &buffer));
        }

        log::debug!(
            "chunked '{}': {} pages -> {} chunks",
            doc.title,
            doc.pages.len(),
            chunks.len()
        );
        chunks
    }

    fn emit(&self, doc: &Document, start_page: u32, end_page: u32, buffer: &[&str]) -> Chunk {
        log::trace!(
            "chunk pages {start_page}-{end_page} ({} tokens)",
            buffer.len()
        );
        Chunk {
            pdf_id: doc.pdf_id.clone(),
            start_page,
            end_page,
            text: buffer.join(" "),
            tokens: None,
        }
    }
}

/// Chunk a document with explicit window parameters
pub fn chunk_pages(
    doc: &Document,
    target_tokens: usize,
    overlap_tokens: usize,
) -> Result<Vec<Chunk>, ConfigError> {
    let chunker = PageChunker::new(ChunkConfig {
        target_tokens,
        overlap_tokens,
    })?;
    Ok(chunker.chunk(doc))
}
