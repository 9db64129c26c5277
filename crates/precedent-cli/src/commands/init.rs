//! Init command implementation.

use super::Context;
use crate::error::Result;

/// Execute the init command.
pub async fn execute_init(ctx: &Context) -> Result<String> {
    ctx.schema().initialize_schema().await?;
    Ok(ctx.formatter.success("Schema constraints declared"))
}
