//! Record and text file reading

use crate::error::CliError;
use anyhow::{Context, Result};
use folio_core::io::read_jsonl;
use folio_core::{Chunk, Document, RecordError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Reader for JSONL record files and plain text
///
/// The path `-` reads from standard input.
pub struct FileReader;

impl FileReader {
    /// Read page-segmented documents
    pub fn read_documents(path: &Path) -> Result<Vec<Document>> {
        let reader = Self::open(path)?;
        read_jsonl(reader).map_err(|e| Self::record_error(path, e))
    }

    /// Read chunk records
    pub fn read_chunks(path: &Path) -> Result<Vec<Chunk>> {
        let reader = Self::open(path)?;
        read_jsonl(reader).map_err(|e| Self::record_error(path, e))
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if Self::is_stdin(path) {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            return Ok(content);
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn open(path: &Path) -> Result<Box<dyn BufRead>> {
        if Self::is_stdin(path) {
            return Ok(Box::new(BufReader::new(io::stdin())));
        }

        let file = File::open(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn is_stdin(path: &Path) -> bool {
        path.as_os_str() == "-"
    }

    fn record_error(path: &Path, err: RecordError) -> anyhow::Error {
        match err {
            RecordError::Malformed { line, source } => CliError::InvalidRecord(format!(
                "{} line {line}: {source}",
                path.display()
            ))
            .into(),
            other => anyhow::Error::new(other)
                .context(format!("Failed to read records from {}", path.display())),
        }
    }
}
