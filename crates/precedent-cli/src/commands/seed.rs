//! Seed command implementation.

use super::Context;
use crate::error::{CliError, Result};
use crate::seed::load_samples;

/// Execute the seed command.
pub async fn execute_seed(ctx: &Context) -> Result<String> {
    if !ctx.store.ping().await {
        return Err(CliError::Unreachable(ctx.config.graph.uri.clone()));
    }

    let count = load_samples(&ctx.schema()).await?;
    Ok(ctx
        .formatter
        .success(&format!("Database initialized with {} sample cases!", count)))
}
