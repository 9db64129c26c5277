//! End-to-end precedent search

use crate::assembler::ResultAssembler;
use crate::builder::TraversalQueryBuilder;
use crate::error::RetrievalError;
use precedent_analyzer::QueryAnalyzer;
use precedent_domain::traits::LlmProvider;
use precedent_domain::{Hints, SearchResponse};
use precedent_store::GraphStore;
use std::sync::Arc;
use tracing::info;

/// Graph half of a search: builder → store → assembler
pub struct Retriever<S: GraphStore + ?Sized> {
    store: Arc<S>,
    builder: TraversalQueryBuilder,
    assembler: ResultAssembler,
}

impl<S: GraphStore + ?Sized> Retriever<S> {
    /// Create a retriever over a shared store
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            builder: TraversalQueryBuilder::new(),
            assembler: ResultAssembler::new(),
        }
    }

    /// Run the traversal for `hints` and assemble the response
    pub async fn retrieve(&self, hints: Hints) -> Result<SearchResponse, RetrievalError> {
        let statement = self.builder.build(&hints);
        let rows = self.store.execute(&statement).await?;

        let response = self.assembler.assemble(&rows, hints);
        info!(
            "Search returned {} cases, {} related cases",
            response.cases.len(),
            response.related_cases.len()
        );
        Ok(response)
    }
}

/// Search pipeline: analyzer → builder → store → assembler
pub struct PrecedentSearch<L, S>
where
    L: LlmProvider + ?Sized,
    S: GraphStore + ?Sized,
{
    analyzer: QueryAnalyzer<L>,
    retriever: Retriever<S>,
}

impl<L, S> PrecedentSearch<L, S>
where
    L: LlmProvider + ?Sized,
    S: GraphStore + ?Sized,
{
    /// Create a search pipeline over a shared store
    pub fn new(analyzer: QueryAnalyzer<L>, store: Arc<S>) -> Self {
        Self {
            analyzer,
            retriever: Retriever::new(store),
        }
    }

    /// Search with a free-text query
    ///
    /// Analysis failures degrade to keyword hints; store failures propagate.
    pub async fn search(&self, raw_query: &str) -> Result<SearchResponse, RetrievalError> {
        info!("Searching for: {}", raw_query);
        let hints = self.analyzer.analyze(raw_query).await;
        self.retriever.retrieve(hints).await
    }

    /// Search with hints the caller already holds, skipping analysis
    pub async fn search_with_hints(&self, hints: Hints) -> Result<SearchResponse, RetrievalError> {
        self.retriever.retrieve(hints).await
    }
}
