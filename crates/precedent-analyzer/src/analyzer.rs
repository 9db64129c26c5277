//! Core QueryAnalyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::parse_analysis;
use crate::prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
use precedent_domain::traits::LlmProvider;
use precedent_domain::Hints;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Converts a free-text legal query into structured [`Hints`]
pub struct QueryAnalyzer<L: LlmProvider + ?Sized> {
    llm_provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L: LlmProvider> QueryAnalyzer<L> {
    /// Create a new QueryAnalyzer owning its provider
    pub fn new(llm_provider: L, config: AnalyzerConfig) -> Self {
        Self::with_shared(Arc::new(llm_provider), config)
    }
}

impl<L: LlmProvider + ?Sized> QueryAnalyzer<L> {
    /// Create a QueryAnalyzer over a shared provider
    pub fn with_shared(llm_provider: Arc<L>, config: AnalyzerConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a query, falling back to keyword hints on any failure
    ///
    /// Never fails: when the provider errors, times out or returns something
    /// that is not the expected JSON object, the result is
    /// [`Hints::fallback`] for the raw query.
    pub async fn analyze(&self, raw_query: &str) -> Hints {
        match self.try_analyze(raw_query).await {
            Ok(hints) => {
                info!(
                    "Query analysis: {} principles, {} keywords",
                    hints.principles.len(),
                    hints.keywords.len()
                );
                hints
            }
            Err(e) => {
                warn!("Query analysis failed, using keyword fallback: {}", e);
                Hints::fallback(raw_query)
            }
        }
    }

    /// Analyze a query, surfacing the failure instead of falling back
    pub async fn try_analyze(&self, raw_query: &str) -> Result<Hints, AnalyzerError> {
        let prompt = PromptBuilder::new(raw_query).build();

        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(self.config.timeout(), self.call_llm(&prompt))
            .await
            .map_err(|_| AnalyzerError::Timeout)??;

        debug!("LLM response length: {} chars", response.len());

        parse_analysis(&response)
    }

    async fn call_llm(&self, prompt: &str) -> Result<String, AnalyzerError> {
        self.llm_provider
            .generate_with_system(SYSTEM_INSTRUCTION, prompt)
            .await
            .map_err(|e| AnalyzerError::Llm(e.to_string()))
    }
}
