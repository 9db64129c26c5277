//! Error types for the query analyzer

use thiserror::Error;

/// Query analysis and analyzer configuration errors
///
/// [`crate::QueryAnalyzer::analyze`] recovers from every provider-side
/// variant by falling back to keyword hints; they are only visible through
/// [`crate::QueryAnalyzer::try_analyze`].
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Provider call exceeded the configured timeout
    #[error("Analysis timeout")]
    Timeout,

    /// Response is JSON but not the expected shape
    #[error("Invalid analysis format: {0}")]
    InvalidFormat(String),

    /// Response is not JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::JsonParse(e.to_string())
    }
}
