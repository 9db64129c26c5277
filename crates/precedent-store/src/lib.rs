//! Precedent Storage Layer
//!
//! Graph store adapter and schema manager for the precedent graph.
//!
//! # Architecture
//!
//! - [`GraphStore`]: executes parameterized [`Statement`]s and returns
//!   backend-neutral [`Row`]s
//! - [`Neo4jStore`]: Bolt backend over a lazily created, shared connection pool
//! - [`MemoryStore`]: in-process graph executing the same statements, for
//!   tests and offline use
//! - [`SchemaManager`]: constraints, case ingestion and case relationships
//!
//! # Examples
//!
//! ```
//! use precedent_store::{GraphStore, MemoryStore, SchemaManager};
//! use precedent_domain::{Case, RelationshipType};
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = Arc::new(MemoryStore::new());
//! let schema = SchemaManager::new(Arc::clone(&store));
//!
//! schema.initialize_schema().await.unwrap();
//! schema.ingest_case(&Case::new("a", "A v. B", 2001, "Supreme Court", "...")).await.unwrap();
//! assert!(store.ping().await);
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod memory;
pub mod neo4j;
pub mod row;
pub mod schema;
pub mod statement;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

pub use config::GraphConfig;
pub use memory::MemoryStore;
pub use neo4j::Neo4jStore;
pub use row::{GraphValue, NodeValue, Row};
pub use schema::SchemaManager;
pub use statement::{Column, ColumnKind, Intent, Param, Statement};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Graph engine unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Credentials rejected by the graph engine
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Statement rejected: malformed text, missing parameter, constraint violation
    #[error("Query error: {0}")]
    Query(String),

    /// A result row could not be normalized
    #[error("Decode error: {0}")]
    Decode(String),

    /// Statement exceeded the configured timeout
    #[error("Statement timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Invalid store configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Domain validation failed before reaching the store
    #[error(transparent)]
    Domain(#[from] precedent_domain::DomainError),
}

impl StoreError {
    /// Whether the error means the engine could not be reached or logged into
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            StoreError::Connection(_) | StoreError::Authentication(_) | StoreError::Timeout(_)
        )
    }
}

/// Trait for executing statements against a graph engine
///
/// Implementations own their connection lifecycle. Callers share one store
/// through an `Arc` so every component reuses the same pool.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Execute a statement and return one [`Row`] per result record
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, StoreError>;

    /// Best-effort connectivity check; never returns an error
    async fn ping(&self) -> bool {
        match self.execute(&Statement::probe()).await {
            Ok(_) => {
                debug!("Graph connection successful");
                true
            }
            Err(e) => {
                error!("Graph connection failed: {}", e);
                false
            }
        }
    }
}
