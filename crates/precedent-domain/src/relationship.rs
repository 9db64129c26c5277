//! Relationship module - typed edges between cases

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight assigned to every case-to-case edge on creation
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Type of a directed Case → Case edge
///
/// The set of storable types is open: any identifier-shaped string is
/// accepted and upper-cased. Retrieval only follows the types listed in
/// [`RelationshipType::TRAVERSABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipType {
    /// One case cites another
    Cites,

    /// One case overrules another
    Overrules,

    /// One case applies the holding of another
    AppliesTo,

    /// Any other caller-supplied type, already upper-cased and validated
    Custom(String),
}

impl RelationshipType {
    /// Types followed when collecting related cases
    pub const TRAVERSABLE: &'static [RelationshipType] = &[
        RelationshipType::Cites,
        RelationshipType::Overrules,
        RelationshipType::AppliesTo,
    ];

    /// Parse caller input into a relationship type
    ///
    /// Input is upper-cased. The result must look like a Cypher identifier
    /// (`[A-Z_][A-Z0-9_]*`) because relationship types cannot be bound as
    /// query parameters and end up embedded in query text.
    ///
    /// # Examples
    ///
    /// ```
    /// use precedent_domain::RelationshipType;
    ///
    /// assert_eq!(RelationshipType::parse("overrules").unwrap(), RelationshipType::Overrules);
    /// assert_eq!(RelationshipType::parse("distinguishes").unwrap().as_str(), "DISTINGUISHES");
    /// assert!(RelationshipType::parse("CITES]->(x) DETACH DELETE x //").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let upper = input.trim().to_uppercase();

        let mut chars = upper.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_uppercase() || first == '_' => {
                chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            }
            _ => false,
        };
        if !valid {
            return Err(DomainError::InvalidRelationshipType(input.to_string()));
        }

        Ok(match upper.as_str() {
            "CITES" => RelationshipType::Cites,
            "OVERRULES" => RelationshipType::Overrules,
            "APPLIES_TO" => RelationshipType::AppliesTo,
            _ => RelationshipType::Custom(upper),
        })
    }

    /// Name as stored in the graph
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipType::Cites => "CITES",
            RelationshipType::Overrules => "OVERRULES",
            RelationshipType::AppliesTo => "APPLIES_TO",
            RelationshipType::Custom(name) => name,
        }
    }

    /// Whether retrieval follows edges of this type
    pub fn is_traversable(&self) -> bool {
        Self::TRAVERSABLE.contains(self)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for RelationshipType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationshipType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A directed relationship between two cases, as supplied for ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRelationship {
    /// Source case id
    pub from: String,

    /// Target case id
    pub to: String,

    /// Edge type
    #[serde(rename = "type")]
    pub rel_type: RelationshipType,
}

impl CaseRelationship {
    /// Create a new relationship
    pub fn new(from: impl Into<String>, to: impl Into<String>, rel_type: RelationshipType) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rel_type,
        }
    }
}
