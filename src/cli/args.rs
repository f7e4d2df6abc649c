//! Command line argument parsing for the Waypost CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Waypost - search and recommendation tools for static-site content
#[derive(Parser, Debug, Clone)]
#[command(name = "waypost")]
#[command(about = "Search and recommendation tools for static-site content")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WaypostArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WaypostArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for CLI results.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a content index
    Search(SearchArgs),

    /// Find documents related to a given document
    Related(RelatedArgs),

    /// Show content index statistics
    Stats(StatsArgs),

    /// Validate a content index file
    Validate(ValidateArgs),
}

/// Arguments for searching an index
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the content index JSON file
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,

    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Wrap query matches in <mark> tags in the output
    #[arg(long)]
    pub highlight: bool,
}

/// Arguments for related-content lookup
#[derive(Parser, Debug, Clone)]
pub struct RelatedArgs {
    /// Path to the content index JSON file
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,

    /// Id of the reference document
    #[arg(value_name = "DOCUMENT_ID")]
    pub document_id: String,

    /// Maximum number of results
    #[arg(short, long, default_value = "3")]
    pub max: usize,
}

/// Arguments for showing index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the content index JSON file
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,
}

/// Arguments for validating an index file
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the content index JSON file
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,
}
