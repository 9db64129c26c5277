//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use async_trait::async_trait;

/// Trait for text-analysis (LLM) providers
///
/// Implemented by the infrastructure layer (precedent-llm). Query analysis
/// only depends on this trait, so its parsing and fallback logic can be
/// exercised without a network call.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for LLM operations
    type Error: std::fmt::Display + Send;

    /// Generate a completion for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate a completion for a prompt under a fixed system instruction
    ///
    /// Providers without a separate system role get the instruction
    /// prepended to the prompt.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        self.generate(&format!("{}\n\n{}", system, prompt)).await
    }
}
