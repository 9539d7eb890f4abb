//! Command line argument parsing for Xiphos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Xiphos - A fast multi-pattern keyword matcher
#[derive(Parser, Debug, Clone)]
#[command(name = "xiphos")]
#[command(about = "A fast multi-pattern keyword matcher for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Xiphos Contributors")]
#[command(long_about = None)]
pub struct XiphosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

impl XiphosArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scan files for keyword occurrences
    Scan(ScanArgs),

    /// Show statistics for a compiled keyword set
    Stats(StatsArgs),
}

/// Arguments for scanning
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Keyword to search for (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// File containing one keyword per line
    #[arg(short = 'K', long, value_name = "KEYWORD_FILE")]
    pub keyword_file: Option<PathBuf>,

    /// Prefix matching lines with their line number
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Files to scan (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments for keyword set statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Keyword to include (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// File containing one keyword per line
    #[arg(short = 'K', long, value_name = "KEYWORD_FILE")]
    pub keyword_file: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
