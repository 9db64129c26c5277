//! Case module - the legal decisions stored in the graph

use crate::error::DomainError;
use crate::principle::Principle;
use crate::response::CaseAttributes;
use serde::{Deserialize, Serialize};

/// A legal decision
///
/// Cases are keyed by `id`, which is assigned by the caller (for example
/// `roe_v_wade_1973`). Ingesting a case twice with the same id overwrites its
/// attributes instead of creating a second node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Stable identifier
    pub id: String,

    /// Display name (e.g. "Roe v. Wade")
    pub name: String,

    /// Year of decision
    pub year: i64,

    /// Issuing court
    pub court: String,

    /// Short summary of the holding
    pub summary: String,

    /// Display names of the principles this case involves
    #[serde(default)]
    pub principles: Vec<String>,

    /// Full opinion text, if available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl Case {
    /// Create a case with no principles and no full text
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        year: i64,
        court: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
            court: court.into(),
            summary: summary.into(),
            principles: Vec::new(),
            full_text: None,
        }
    }

    /// Attach principles by display name
    pub fn with_principles<I, S>(mut self, principles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.principles = principles.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the full opinion text
    pub fn with_full_text(mut self, full_text: impl Into<String>) -> Self {
        self.full_text = Some(full_text.into());
        self
    }

    /// Check the case can be stored
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidCase("id must not be empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidCase(format!(
                "case '{}' has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    /// Principle nodes referenced by this case, in listing order
    pub fn principle_nodes(&self) -> Vec<Principle> {
        self.principles.iter().map(Principle::from_name).collect()
    }

    /// Rebuild a case from the attributes of a stored Case node
    ///
    /// Principles live on separate nodes and are not part of the attribute
    /// map, so the returned case has an empty principle list. An empty
    /// `fullText` is read back as `None`.
    pub fn from_attributes(attributes: &CaseAttributes) -> Result<Self, DomainError> {
        let text = |key: &str| -> Result<String, DomainError> {
            attributes
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| DomainError::MissingAttribute(key.to_string()))
        };

        let year = attributes
            .get("year")
            .and_then(|v| v.as_i64())
            .ok_or_else(|| DomainError::MissingAttribute("year".to_string()))?;

        let full_text = attributes
            .get("fullText")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: text("id")?,
            name: text("name")?,
            year,
            court: text("court")?,
            summary: text("summary")?,
            principles: Vec::new(),
            full_text,
        })
    }
}
