//! Precedent Retrieval
//!
//! Turns query hints into a bounded graph traversal and shapes the rows into
//! a [`SearchResponse`](precedent_domain::SearchResponse).
//!
//! # Architecture
//!
//! ```text
//! raw query → QueryAnalyzer → Hints → TraversalQueryBuilder → Statement
//!           → GraphStore::execute → Rows → ResultAssembler → SearchResponse
//! ```
//!
//! The builder is pure and the assembler does no I/O, so both are tested
//! without a graph. [`PrecedentSearch`] wires them to an analyzer and a
//! shared store.
//!
//! # Example Usage
//!
//! ```
//! use precedent_analyzer::{AnalyzerConfig, QueryAnalyzer};
//! use precedent_domain::Hints;
//! use precedent_llm::MockProvider;
//! use precedent_retrieval::PrecedentSearch;
//! use precedent_store::MemoryStore;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let analyzer = QueryAnalyzer::new(MockProvider::default(), AnalyzerConfig::default());
//! let search = PrecedentSearch::new(analyzer, Arc::new(MemoryStore::new()));
//!
//! let response = search.search_with_hints(Hints::with_principles(["Federalism"])).await.unwrap();
//! assert!(response.cases.is_empty());
//! # });
//! ```

#![warn(missing_docs)]

mod assembler;
mod builder;
mod error;
mod search;

pub use assembler::ResultAssembler;
pub use builder::{TraversalQueryBuilder, CASE_COLUMN, MAX_RESULTS, RELATED_COLUMN};
pub use error::RetrievalError;
pub use search::{PrecedentSearch, Retriever};
