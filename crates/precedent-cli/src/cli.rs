//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Precedent CLI - Search legal precedent in a case graph.
#[derive(Debug, Parser)]
#[command(name = "precedent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PRECEDENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use an in-memory graph preloaded with the sample cases instead of Neo4j
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check connectivity to the graph engine
    Ping,

    /// Declare uniqueness constraints
    Init,

    /// Ingest cases from a JSON file
    Ingest(IngestArgs),

    /// Create a typed relationship between two cases
    Relate(RelateArgs),

    /// Search for precedent
    Search(SearchArgs),

    /// Load the sample cases and relationships
    Seed,
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// JSON file holding one case object or an array of cases
    pub file: PathBuf,
}

/// Arguments for the relate command.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// Source case id
    pub from: String,

    /// Target case id
    pub to: String,

    /// Relationship type (e.g. cites, overrules, applies_to)
    #[arg(value_name = "TYPE")]
    pub rel_type: String,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Free-text legal research question
    pub query: String,

    /// Filter by principle name, skipping query analysis (repeatable)
    #[arg(short, long = "principle", value_name = "PRINCIPLE")]
    pub principles: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
