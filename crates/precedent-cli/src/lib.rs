//! Precedent CLI library.
//!
//! This library provides the core functionality for the `precedent`
//! command-line interface: configuration loading, store selection, command
//! execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod seed;

pub use cli::{Cli, Command};
pub use commands::Context;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use precedent_store::{GraphStore, MemoryStore, Neo4jStore, SchemaManager};
use std::sync::Arc;
use tracing::info;

/// Build the command context: configuration layers, formatter and store.
///
/// `--memory` selects an in-memory graph preloaded with the sample cases, so
/// every command works offline within a single invocation.
pub async fn build_context(cli: &Cli) -> Result<Context> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    config.validate()?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let store: Arc<dyn GraphStore> = if cli.memory {
        info!("Using in-memory graph with sample data");
        let memory = Arc::new(MemoryStore::new());
        seed::load_samples(&SchemaManager::new(Arc::clone(&memory))).await?;
        memory as Arc<dyn GraphStore>
    } else {
        Arc::new(Neo4jStore::new(config.graph.clone())?)
    };

    Ok(Context {
        config,
        store,
        formatter,
    })
}

/// Execute the parsed command and return its rendered output.
pub async fn run(cli: Cli) -> Result<String> {
    let ctx = build_context(&cli).await?;

    match cli.command {
        Command::Ping => commands::execute_ping(&ctx).await,
        Command::Init => commands::execute_init(&ctx).await,
        Command::Ingest(args) => commands::execute_ingest(args, &ctx).await,
        Command::Relate(args) => commands::execute_relate(args, &ctx).await,
        Command::Search(args) => commands::execute_search(args, &ctx).await,
        Command::Seed => commands::execute_seed(&ctx).await,
    }
}
