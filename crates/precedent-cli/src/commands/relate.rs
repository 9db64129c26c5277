//! Relate command implementation.

use super::Context;
use crate::cli::RelateArgs;
use crate::error::Result;
use precedent_domain::{CaseRelationship, RelationshipType};

/// Execute the relate command.
///
/// A missing case is reported as a warning, not an error.
pub async fn execute_relate(args: RelateArgs, ctx: &Context) -> Result<String> {
    let rel = CaseRelationship::new(args.from, args.to, RelationshipType::parse(&args.rel_type)?);

    let touched = ctx
        .schema()
        .create_relationship(&rel.from, &rel.to, &rel.rel_type)
        .await?;

    let message = format!("{} -[{}]-> {}", rel.from, rel.rel_type, rel.to);
    Ok(if touched == 0 {
        ctx.formatter
            .warning(&format!("{} not created: case not found", message))
    } else {
        ctx.formatter.success(&format!("Related {}", message))
    })
}
