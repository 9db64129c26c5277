//! Configuration management for the CLI.
//!
//! Settings come from a TOML file (default `~/.precedent/config.toml`),
//! then environment variables, then command-line flags, each overriding the
//! previous layer.

use crate::error::{CliError, Result};
use precedent_analyzer::AnalyzerConfig;
use precedent_llm::{LlmConfig, ProviderKind};
use precedent_store::GraphConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Graph engine connection
    #[serde(default)]
    pub graph: GraphConfig,

    /// Text-analysis provider
    #[serde(default)]
    pub llm: LlmConfig,

    /// Query analysis
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Output settings
    #[serde(default)]
    pub settings: Settings,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".precedent").join("config.toml"))
    }

    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an environment lookup.
    ///
    /// `NEO4J_URI`, `NEO4J_USER` and `NEO4J_PASSWORD` set the graph
    /// connection. `GROQ_API_KEY` sets the API key for the Groq provider, and
    /// `OPENAI_API_KEY` for the OpenAI provider. Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(uri) = get("NEO4J_URI") {
            self.graph.uri = uri;
        }
        if let Some(user) = get("NEO4J_USER") {
            self.graph.user = user;
        }
        if let Some(password) = get("NEO4J_PASSWORD") {
            self.graph.password = password;
        }

        let key_var = match self.llm.provider {
            ProviderKind::Groq => Some("GROQ_API_KEY"),
            ProviderKind::OpenAi => Some("OPENAI_API_KEY"),
            ProviderKind::Ollama | ProviderKind::Mock => None,
        };
        if let Some(api_key) = key_var.and_then(get) {
            self.llm.api_key = Some(api_key);
        }
    }

    /// Validate the graph and analyzer sections.
    ///
    /// The LLM section is validated when a provider is built, since searches
    /// with explicit principles never need one.
    pub fn validate(&self) -> Result<()> {
        self.graph
            .validate()
            .map_err(|e| CliError::Config(format!("[graph] {}", e)))?;
        self.analyzer
            .validate()
            .map_err(|e| CliError::Config(format!("[analyzer] {}", e)))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graph.uri, "bolt://localhost:7687");
        assert_eq!(config.analyzer.timeout_secs, 30);
        assert!(config.settings.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [graph]
            uri = "neo4j+s://demo.databases.neo4j.io"

            [llm]
            provider = "ollama"
            model = "llama3.1"
            "#,
        )
        .unwrap();

        assert_eq!(config.graph.uri, "neo4j+s://demo.databases.neo4j.io");
        assert_eq!(config.graph.user, "neo4j");
        assert_eq!(config.llm.provider, ProviderKind::Ollama);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("NEO4J_URI", "bolt://graph:7687"),
            ("NEO4J_PASSWORD", "secret"),
            ("NEO4J_USER", ""),
            ("GROQ_API_KEY", "gsk_test"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.graph.uri, "bolt://graph:7687");
        assert_eq!(config.graph.password, "secret");
        assert_eq!(config.graph.user, "neo4j");
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk_test"));
    }

    #[test]
    fn test_env_key_follows_provider() {
        let mut config = Config::default();
        config.llm.provider = ProviderKind::Ollama;
        config.apply_env_from(|key| (key == "GROQ_API_KEY").then(|| "gsk_test".to_string()));

        assert_eq!(config.llm.api_key, None);
    }

    #[test]
    fn test_invalid_graph_section() {
        let mut config = Config::default();
        config.graph.max_connections = 0;
        assert!(matches!(config.validate(), Err(CliError::Config(msg)) if msg.starts_with("[graph]")));
    }
}
