//! Chunk command implementation

use super::{init_logging, BatchArgs, WindowArgs};
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use folio_core::Pipeline;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub window: WindowArgs,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.batch.verbose, self.batch.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self.batch.resolve_config(&self.window, &[])?;
        let pipeline = Pipeline::from_config(&config)?;

        let documents = self.batch.read_inputs(FileReader::read_documents)?;
        let output = pipeline.chunk_documents(&documents)?;

        self.batch.write_output(&output.chunks)
    }
}
