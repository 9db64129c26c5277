//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph store error
    #[error(transparent)]
    Store(#[from] precedent_store::StoreError),

    /// Search error
    #[error(transparent)]
    Retrieval(#[from] precedent_retrieval::RetrievalError),

    /// LLM provider setup error
    #[error("LLM error: {0}")]
    Llm(#[from] precedent_llm::LlmError),

    /// Invalid case or relationship input
    #[error("Invalid input: {0}")]
    Domain(#[from] precedent_domain::DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Graph engine unreachable
    #[error("Cannot connect to the graph engine at {0}. Check [graph] settings or NEO4J_* variables.")]
    Unreachable(String),
}
