//! JSONL output formatter

use super::OutputFormatter;
use anyhow::Result;
use folio_core::Chunk;
use std::io::Write;

/// JSONL formatter - streams one chunk object per line
pub struct JsonlFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonlFormatter<W> {
    /// Create a new JSONL formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Records written so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonlFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        serde_json::to_writer(&mut self.writer, chunk)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
