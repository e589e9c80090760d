//! Run command implementation

use super::{init_logging, BatchArgs, WindowArgs};
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use folio_core::Pipeline;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Additional stopword (repeatable)
    #[arg(long = "extra-stopword", value_name = "WORD")]
    pub extra_stopwords: Vec<String>,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.batch.verbose, self.batch.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self
            .batch
            .resolve_config(&self.window, &self.extra_stopwords)?;
        let pipeline = Pipeline::from_config(&config)?;

        let documents = self.batch.read_inputs(FileReader::read_documents)?;
        let output = pipeline.process_documents(&documents)?;

        self.batch.write_output(&output.chunks)
    }
}
