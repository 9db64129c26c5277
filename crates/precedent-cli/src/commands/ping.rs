//! Ping command implementation.

use super::Context;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};

/// Execute the ping command.
pub async fn execute_ping(ctx: &Context) -> Result<String> {
    if !ctx.store.ping().await {
        return Err(CliError::Unreachable(ctx.config.graph.uri.clone()));
    }

    Ok(match ctx.formatter.format() {
        OutputFormat::Json => serde_json::json!({ "connected": true }).to_string(),
        OutputFormat::Table => ctx.formatter.success("Database connected!"),
    })
}
