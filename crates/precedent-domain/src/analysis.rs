//! Query analysis hints

use serde::{Deserialize, Serialize};

/// Structured hints extracted from a free-text legal query
///
/// Produced by query analysis and consumed by the traversal builder. The
/// hints are also returned to the caller unchanged, so they can see how
/// their question was interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    /// Candidate legal principles, matched against Principle display names
    #[serde(default)]
    pub principles: Vec<String>,

    /// Important keywords from the query
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Hints {
    /// Hints with the given principles and no keywords
    pub fn with_principles<I, S>(principles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            principles: principles.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }

    /// Deterministic hints used when analysis is unavailable
    ///
    /// Every whitespace-separated token of the query, lower-cased, becomes a
    /// keyword; no principles are guessed.
    ///
    /// # Examples
    ///
    /// ```
    /// use precedent_domain::Hints;
    ///
    /// let hints = Hints::fallback("Cases about Data Privacy");
    /// assert!(hints.principles.is_empty());
    /// assert_eq!(hints.keywords, vec!["cases", "about", "data", "privacy"]);
    /// ```
    pub fn fallback(raw_query: &str) -> Self {
        Self {
            principles: Vec::new(),
            keywords: raw_query
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Whether the hints constrain matches by principle
    pub fn has_principles(&self) -> bool {
        !self.principles.is_empty()
    }
}
