//! Ingest command implementation.

use super::Context;
use crate::cli::IngestArgs;
use crate::error::Result;
use precedent_domain::Case;
use serde_json::Value;
use std::fs;

/// Execute the ingest command.
pub async fn execute_ingest(args: IngestArgs, ctx: &Context) -> Result<String> {
    let contents = fs::read_to_string(&args.file)?;
    let cases = parse_cases(&contents)?;

    // Validate everything before the first write
    for case in &cases {
        case.validate()?;
    }

    let schema = ctx.schema();
    for case in &cases {
        schema.ingest_case(case).await?;
    }

    Ok(ctx
        .formatter
        .success(&format!("Ingested {} case(s)", cases.len())))
}

/// Parse a single case object or an array of cases.
pub fn parse_cases(json: &str) -> Result<Vec<Case>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(match value {
        Value::Array(_) => serde_json::from_value(value)?,
        _ => vec![serde_json::from_value(value)?],
    })
}
