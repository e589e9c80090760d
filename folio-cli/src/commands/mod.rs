//! CLI command implementations

use crate::config::{load_config, ConfigOverrides};
use crate::input::resolve_patterns;
use crate::output::{create_formatter, write_chunks, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::{Args, Subcommand};
use folio_core::{Chunk, FolioConfig};
use std::path::{Path, PathBuf};

pub mod chunk;
pub mod generate_config;
pub mod normalize;
pub mod preprocess;
pub mod run;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cut page-segmented documents into overlapping token windows
    Chunk(chunk::ChunkArgs),

    /// Attach filtered lemma tokens to chunk records
    Preprocess(preprocess::PreprocessArgs),

    /// Chunk documents and preprocess the chunks in one pass
    Run(run::RunArgs),

    /// Normalize text from an argument or standard input
    Normalize(normalize::NormalizeArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration or lexicon file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(),
            Commands::Preprocess(args) => args.execute(),
            Commands::Run(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Input, output and execution flags shared by the batch commands
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input JSONL files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "jsonl")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Force parallel processing even for small batches
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Window sizing flags
#[derive(Debug, Args, Default)]
pub struct WindowArgs {
    /// Coarse tokens per chunk
    #[arg(long, value_name = "N")]
    pub target: Option<usize>,

    /// Tokens repeated at the start of the next chunk
    #[arg(long, value_name = "N")]
    pub overlap: Option<usize>,
}

impl BatchArgs {
    /// Load the configuration file and apply command-line overrides
    pub fn resolve_config(
        &self,
        window: &WindowArgs,
        extra_stopwords: &[String],
    ) -> Result<FolioConfig> {
        let overrides = ConfigOverrides {
            target_tokens: window.target,
            overlap_tokens: window.overlap,
            extra_stopwords: extra_stopwords.to_vec(),
            threads: self.threads,
            parallel: self.parallel,
        };
        overrides.apply(load_config(self.config.as_deref())?)
    }

    /// Read every input file with `read`, in sorted path order
    pub fn read_inputs<T>(&self, read: fn(&Path) -> Result<Vec<T>>) -> Result<Vec<T>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Reading {} input file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
        progress.init_files(files.len() as u64);

        let mut records = Vec::new();
        for file in &files {
            let batch = read(file)?;
            log::debug!("{}: {} records", file.display(), batch.len());
            records.extend(batch);
            progress.file_completed(&file.display().to_string());
        }

        progress.finish(&format!("{} records", records.len()));
        Ok(records)
    }

    /// Write chunks in the selected format
    pub fn write_output(&self, chunks: &[Chunk]) -> Result<()> {
        let mut formatter = create_formatter(self.format, self.output.as_deref())?;
        write_chunks(formatter.as_mut(), chunks)?;

        if let Some(path) = &self.output {
            log::info!("Wrote {} chunks to {}", chunks.len(), path.display());
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
