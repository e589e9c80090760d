//! Folio CLI library
//!
//! This library provides the command-line interface for chunking
//! page-segmented documents and preprocessing the resulting chunks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
