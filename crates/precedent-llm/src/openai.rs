//! OpenAI-compatible chat completions provider
//!
//! Works against any endpoint speaking the `/chat/completions` protocol.
//! Groq is the default deployment; OpenAI itself works by switching the
//! endpoint and key.

use crate::config::LlmConfig;
use crate::LlmError;
use async_trait::async_trait;
use precedent_domain::traits::LlmProvider as LlmProviderTrait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Chat-completions provider (Groq, OpenAI)
pub struct OpenAiCompatProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    temperature: f32,
    max_tokens: u32,
    max_retries: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatProvider {
    /// Create a provider from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::Config("api_key is required".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            client,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            max_retries: config.max_retries.max(1),
        })
    }

    /// Model in use
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request<'a>(&'a self, system: Option<&'a str>, prompt: &'a str) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(Message {
                role: "system",
                content: system,
            });
        }
        messages.push(Message {
            role: "user",
            content: prompt,
        });

        ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    async fn chat(&self, system: Option<&str>, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);
        let body = self.request(system, prompt);

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => match response.status() {
                    status if status.is_success() => {
                        let parsed: ChatResponse = response.json().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return Ok(parsed
                            .choices
                            .into_iter()
                            .next()
                            .and_then(|c| c.message.content)
                            .unwrap_or_default());
                    }
                    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                        return Err(LlmError::Authentication(format!(
                            "HTTP {} from {}",
                            response.status(),
                            self.endpoint
                        )));
                    }
                    StatusCode::NOT_FOUND => {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    }
                    StatusCode::TOO_MANY_REQUESTS => {
                        last_error = Some(LlmError::RateLimitExceeded);
                    }
                    status => {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                },
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = crate::backoff_delay(attempts);
                warn!("Chat completion failed, retrying in {:?} (attempt {})", delay, attempts);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl LlmProviderTrait for OpenAiCompatProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        debug!("Chat completion with model {}", self.model);
        self.chat(None, prompt).await
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        debug!("Chat completion with model {} and system instruction", self.model);
        self.chat(Some(system), prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderKind;

    fn groq_config() -> LlmConfig {
        LlmConfig {
            provider: ProviderKind::Groq,
            api_key: Some("gsk_test".to_string()),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = LlmConfig {
            api_key: None,
            ..groq_config()
        };
        assert!(matches!(
            OpenAiCompatProvider::from_config(&config),
            Err(LlmError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_uses_groq_endpoint() {
        let provider = OpenAiCompatProvider::from_config(&groq_config()).unwrap();
        assert_eq!(provider.endpoint, "https://api.groq.com/openai/v1");
        assert_eq!(provider.model(), "llama-3.1-70b-versatile");
    }

    #[test]
    fn test_request_body_shape() {
        let provider = OpenAiCompatProvider::from_config(&groq_config()).unwrap();
        let body = serde_json::to_value(provider.request(Some("sys"), "question")).unwrap();

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "question");
        assert_eq!(body["max_tokens"], 500);
    }

    #[test]
    fn test_request_without_system() {
        let provider = OpenAiCompatProvider::from_config(&groq_config()).unwrap();
        let body = serde_json::to_value(provider.request(None, "question")).unwrap();
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_response_parsing() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "{\"principles\": []}"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some(r#"{"principles": []}"#)
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let config = LlmConfig {
            endpoint: Some("http://127.0.0.1:9".to_string()),
            max_retries: 1,
            ..groq_config()
        };
        let provider = OpenAiCompatProvider::from_config(&config).unwrap();

        let result = provider.generate("test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    #[tokio::test]
    #[ignore] // Only run with GROQ_API_KEY set
    async fn test_live_groq() {
        let config = LlmConfig {
            api_key: std::env::var("GROQ_API_KEY").ok(),
            ..groq_config()
        };
        let provider = OpenAiCompatProvider::from_config(&config).unwrap();

        let result = provider
            .generate_with_system("Reply with the word yes.", "Ready?")
            .await;
        assert!(result.is_ok());
    }
}
