//! Error types for retrieval

use precedent_store::StoreError;
use thiserror::Error;

/// Errors that can occur during a search
///
/// Analysis never fails a search, so every variant originates in the graph.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Graph store error, propagated without retry
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl RetrievalError {
    /// Whether the graph engine could not be reached or logged into
    pub fn is_connectivity(&self) -> bool {
        match self {
            RetrievalError::Store(e) => e.is_connectivity(),
        }
    }
}
