//! Graph connection configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the graph engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Bolt URI (e.g. "bolt://localhost:7687", "neo4j+s://xxxx.databases.neo4j.io")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Username
    #[serde(default = "default_user")]
    pub user: String,

    /// Password
    #[serde(default)]
    pub password: String,

    /// Database name
    #[serde(default = "default_database")]
    pub database: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Per-statement timeout (seconds); 0 disables it
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_database() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> usize {
    8
}

fn default_query_timeout() -> u64 {
    30
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
            max_connections: default_max_connections(),
            query_timeout_secs: default_query_timeout(),
        }
    }
}

impl GraphConfig {
    /// Per-statement timeout, if enabled
    pub fn query_timeout(&self) -> Option<Duration> {
        (self.query_timeout_secs > 0).then(|| Duration::from_secs(self.query_timeout_secs))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.uri.trim().is_empty() {
            return Err("uri must not be empty".to_string());
        }
        if !self.uri.contains("://") {
            return Err(format!("uri '{}' has no scheme", self.uri));
        }
        if self.user.trim().is_empty() {
            return Err("user must not be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("max_connections must be greater than 0".to_string());
        }
        Ok(())
    }
}
