//! Precedent LLM Provider Layer
//!
//! Pluggable text-analysis providers implementing the `LlmProvider` trait
//! from `precedent-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiCompatProvider`: OpenAI-compatible chat completions (Groq, OpenAI)
//! - `OllamaProvider`: Local Ollama API integration
//! - `AnyProvider`: Runtime selection between the above from `LlmConfig`
//!
//! # Examples
//!
//! ```
//! use precedent_llm::MockProvider;
//! use precedent_domain::traits::LlmProvider;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use precedent_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use config::{LlmConfig, ProviderKind};
pub use ollama::OllamaProvider;
pub use openai::OpenAiCompatProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credentials rejected by the provider
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider misconfigured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Longest wait between two provider attempts
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Delay before retry number `attempt` (1-based): 1s, 2s, 4s, ... capped at
/// [`MAX_BACKOFF`].
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    let secs = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_secs(secs).min(MAX_BACKOFF)
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
/// Responses are keyed by the user prompt; the system instruction is recorded
/// but not used for lookup.
///
/// # Examples
///
/// ```
/// use precedent_llm::MockProvider;
/// use precedent_domain::traits::LlmProvider;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").await.unwrap(), "response1");
/// assert_eq!(provider.generate("other").await.unwrap(), "Default mock response");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    last_system: Arc<Mutex<Option<String>>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_system: Arc::new(Mutex::new(None)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), "ERROR".to_string());
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// System instruction of the most recent call, if any
    pub fn last_system(&self) -> Option<String> {
        self.last_system.lock().unwrap().clone()
    }

    /// User prompt of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.last_system.lock().unwrap() = None;
        self.respond(prompt)
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        *self.last_system.lock().unwrap() = Some(system.to_string());
        self.respond(prompt)
    }
}

/// A provider chosen at runtime from configuration
pub enum AnyProvider {
    /// Deterministic mock
    Mock(MockProvider),
    /// OpenAI-compatible chat completions
    OpenAi(OpenAiCompatProvider),
    /// Local Ollama
    Ollama(OllamaProvider),
}

impl AnyProvider {
    /// Build the provider described by `config`
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::Config)?;

        Ok(match config.provider {
            ProviderKind::Mock => AnyProvider::Mock(MockProvider::new(
                config.mock_response.clone().unwrap_or_default(),
            )),
            ProviderKind::Groq | ProviderKind::OpenAi => {
                AnyProvider::OpenAi(OpenAiCompatProvider::from_config(config)?)
            }
            ProviderKind::Ollama => AnyProvider::Ollama(OllamaProvider::from_config(config)?),
        })
    }

    /// Name of the model in use
    pub fn model_name(&self) -> &str {
        match self {
            AnyProvider::Mock(_) => "mock",
            AnyProvider::OpenAi(p) => p.model(),
            AnyProvider::Ollama(p) => p.model(),
        }
    }
}

#[async_trait]
impl LlmProviderTrait for AnyProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            AnyProvider::Mock(p) => p.generate(prompt).await,
            AnyProvider::OpenAi(p) => LlmProviderTrait::generate(p, prompt).await,
            AnyProvider::Ollama(p) => LlmProviderTrait::generate(p, prompt).await,
        }
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        match self {
            AnyProvider::Mock(p) => p.generate_with_system(system, prompt).await,
            AnyProvider::OpenAi(p) => p.generate_with_system(system, prompt).await,
            AnyProvider::Ollama(p) => p.generate_with_system(system, prompt).await,
        }
    }
}
