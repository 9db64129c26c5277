//! Precedent Domain Layer
//!
//! This crate contains the core data model for Precedent, a legal precedent
//! retrieval engine backed by a property graph. It defines the value objects
//! every other layer passes around and the trait seam for text analysis.
//!
//! ## Key Concepts
//!
//! - **Case**: A legal decision, keyed by a stable externally assigned id
//! - **Principle**: A legal doctrine, keyed by a slug derived from its name
//! - **RelationshipType**: The typed edge between two cases (CITES, OVERRULES, ...)
//! - **Hints**: The structured output of query analysis
//! - **SearchResponse**: Matched cases, related cases and the hints that produced them
//!
//! ## Architecture
//!
//! - No I/O in this crate
//! - Graph and LLM implementations live in other crates
//! - Trait definitions for the text-analysis capability

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod case;
pub mod error;
pub mod principle;
pub mod relationship;
pub mod response;
pub mod traits;

// Re-exports for convenience
pub use analysis::Hints;
pub use case::Case;
pub use error::DomainError;
pub use principle::{principle_id, Principle};
pub use relationship::{CaseRelationship, RelationshipType};
pub use response::{CaseAttributes, SearchResponse};
