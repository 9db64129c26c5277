//! Precedent Query Analyzer
//!
//! Converts a natural-language legal research question into structured
//! [`Hints`](precedent_domain::Hints) using an LLM.
//!
//! # Architecture
//!
//! ```text
//! Query → PromptBuilder → LLM → parse_analysis → Hints
//!                                     ↘ (any failure) Hints::fallback
//! ```
//!
//! The analyzer never fails a search: a provider error, a timeout or a
//! response that is not the expected JSON object all degrade to keyword
//! hints built from the raw query.
//!
//! # Example Usage
//!
//! ```
//! use precedent_analyzer::{AnalyzerConfig, QueryAnalyzer};
//! use precedent_llm::MockProvider;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let llm = MockProvider::new(r#"{"principles": ["Federalism"], "keywords": []}"#);
//! let analyzer = QueryAnalyzer::new(llm, AnalyzerConfig::default());
//!
//! let hints = analyzer.analyze("Which cases limit federal power?").await;
//! assert_eq!(hints.principles, vec!["Federalism"]);
//! # });
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;

pub use analyzer::QueryAnalyzer;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use parser::{extract_json, parse_analysis};
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
