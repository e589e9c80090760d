//! Output formatting module

use anyhow::{Context, Result};
use folio_core::Chunk;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk record
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod jsonl;

pub use json::JsonFormatter;
pub use jsonl::JsonlFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Jsonl,
    /// A single pretty-printed JSON array
    Json,
}

/// Build a formatter writing to `output`, or stdout when absent
pub fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn OutputFormatter>> {
    let writer: Box<dyn Write + Send + Sync> = match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Jsonl => Box::new(JsonlFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    })
}

/// Write every chunk through a formatter and finish it
pub fn write_chunks(formatter: &mut dyn OutputFormatter, chunks: &[Chunk]) -> Result<()> {
    for chunk in chunks {
        formatter.format_chunk(chunk)?;
    }
    formatter.finish()
}
