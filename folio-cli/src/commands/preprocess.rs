//! Preprocess command implementation

use super::{init_logging, BatchArgs, WindowArgs};
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use folio_core::Pipeline;

/// Arguments for the preprocess command
#[derive(Debug, Args)]
pub struct PreprocessArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Additional stopword (repeatable)
    #[arg(long = "extra-stopword", value_name = "WORD")]
    pub extra_stopwords: Vec<String>,
}

impl PreprocessArgs {
    /// Execute the preprocess command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.batch.verbose, self.batch.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self
            .batch
            .resolve_config(&WindowArgs::default(), &self.extra_stopwords)?;
        let pipeline = Pipeline::from_config(&config)?;

        let mut chunks = self.batch.read_inputs(FileReader::read_chunks)?;
        let mode = pipeline.filter_chunks(&mut chunks)?;
        log::info!("Filtered {} chunks ({mode} mode)", chunks.len());

        self.batch.write_output(&chunks)
    }
}
