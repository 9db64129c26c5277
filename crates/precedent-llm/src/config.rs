//! Configuration for text-analysis providers

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which provider backs query analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Groq's OpenAI-compatible endpoint
    Groq,
    /// OpenAI chat completions
    OpenAi,
    /// Local Ollama server
    Ollama,
    /// Fixed response, no network
    Mock,
}

impl ProviderKind {
    /// Endpoint used when none is configured
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "https://api.groq.com/openai/v1",
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::Ollama => crate::ollama::DEFAULT_ENDPOINT,
            ProviderKind::Mock => "",
        }
    }

    fn requires_api_key(&self) -> bool {
        matches!(self, ProviderKind::Groq | ProviderKind::OpenAi)
    }
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Groq
    }
}

/// Text-analysis provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider kind
    #[serde(default)]
    pub provider: ProviderKind,

    /// API base URL; the provider default when absent
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API key for hosted providers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// HTTP request timeout (seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Attempts per call before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Response returned by the mock provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_response: Option<String>,
}

fn default_model() -> String {
    "llama-3.1-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    500
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            endpoint: None,
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
            mock_response: None,
        }
    }
}

impl LlmConfig {
    /// Endpoint to call, falling back to the provider default
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| self.provider.default_endpoint().to_string())
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.provider == ProviderKind::Mock {
            return Ok(());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.provider.requires_api_key()
            && self.api_key.as_deref().map_or(true, |k| k.trim().is_empty())
        {
            return Err(format!("{:?} provider requires an api_key", self.provider));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be within [0.0, 2.0]".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_requires_api_key() {
        let config = LlmConfig::default();
        assert_eq!(config.provider, ProviderKind::Groq);
        assert!(config.validate().is_err());

        let config = LlmConfig {
            api_key: Some("gsk_test".to_string()),
            ..LlmConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = LlmConfig {
            provider: ProviderKind::Ollama,
            model: "llama3".to_string(),
            ..LlmConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint(), "http://localhost:11434");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = LlmConfig {
            endpoint: Some("http://proxy:9000/v1".to_string()),
            ..LlmConfig::default()
        };
        assert_eq!(config.endpoint(), "http://proxy:9000/v1");
    }

    #[test]
    fn test_invalid_temperature() {
        let config = LlmConfig {
            provider: ProviderKind::Ollama,
            temperature: 3.5,
            ..LlmConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config: LlmConfig = toml::from_str(
            r#"
            provider = "openai"
            model = "gpt-4o-mini"
            api_key = "sk-test"
            max_tokens = 256
            "#,
        )
        .unwrap();

        assert_eq!(config.provider, ProviderKind::OpenAi);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.endpoint(), "https://api.openai.com/v1");
    }
}
