//! Search command implementation.

use super::Context;
use crate::cli::SearchArgs;
use crate::error::Result;
use precedent_analyzer::QueryAnalyzer;
use precedent_domain::Hints;
use precedent_llm::AnyProvider;
use precedent_retrieval::{PrecedentSearch, Retriever};
use std::sync::Arc;
use tracing::info;

/// Execute the search command.
///
/// With `--principle`, the given names are used as hints directly and no
/// LLM provider is built.
pub async fn execute_search(args: SearchArgs, ctx: &Context) -> Result<String> {
    let response = if args.principles.is_empty() {
        let provider = AnyProvider::from_config(&ctx.config.llm)?;
        info!("Analyzing query with model {}", provider.model_name());

        let analyzer = QueryAnalyzer::new(provider, ctx.config.analyzer.clone());
        PrecedentSearch::new(analyzer, Arc::clone(&ctx.store))
            .search(&args.query)
            .await?
    } else {
        Retriever::new(Arc::clone(&ctx.store))
            .retrieve(Hints::with_principles(args.principles))
            .await?
    };

    ctx.formatter.format_search(&response)
}
