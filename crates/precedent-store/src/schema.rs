//! Graph schema manager
//!
//! Declares uniqueness constraints and performs every write the system
//! makes: case upserts, principle links and case-to-case relationships. All
//! writes are MERGE-then-SET, so replaying them is safe.

use crate::statement::{ColumnKind, Intent, Statement};
use crate::{GraphStore, StoreError};
use precedent_domain::relationship::DEFAULT_WEIGHT;
use precedent_domain::{Case, Principle, RelationshipType};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Uniqueness constraints declared by [`SchemaManager::initialize_schema`]
pub const CONSTRAINTS: &[(&str, &str, &str)] = &[
    ("case_id", "Case", "id"),
    ("principle_id", "Principle", "id"),
];

/// Statement declaring a uniqueness constraint, skipped if it already exists
pub fn constraint_statement(name: &str, label: &'static str, property: &'static str) -> Statement {
    Statement::new(
        format!(
            "CREATE CONSTRAINT {} IF NOT EXISTS FOR (n:{}) REQUIRE n.{} IS UNIQUE",
            name, label, property
        ),
        Intent::CreateConstraint { label, property },
    )
}

/// Statement upserting a Case node and overwriting its scalar attributes
pub fn merge_case_statement(case: &Case) -> Statement {
    Statement::new(
        "MERGE (c:Case {id: $id}) \
         SET c.name = $name, c.year = $year, c.court = $court, \
         c.summary = $summary, c.fullText = $fullText",
        Intent::MergeCase,
    )
    .param("id", case.id.as_str())
    .param("name", case.name.as_str())
    .param("year", case.year)
    .param("court", case.court.as_str())
    .param("summary", case.summary.as_str())
    .param("fullText", case.full_text.clone().unwrap_or_default())
}

/// Statement upserting a Principle and linking it from a case
pub fn merge_principle_statement(case_id: &str, principle: &Principle) -> Statement {
    Statement::new(
        "MERGE (p:Principle {id: $principleId}) \
         SET p.name = $principleName \
         WITH p \
         MATCH (c:Case {id: $caseId}) \
         MERGE (c)-[:INVOLVES_PRINCIPLE]->(p)",
        Intent::MergePrincipleLink,
    )
    .param("principleId", principle.id.as_str())
    .param("principleName", principle.name.as_str())
    .param("caseId", case_id)
}

/// Statement upserting a typed edge between two existing cases
///
/// The weight is only set when the edge is created. Returns one `type` row per edge touched, so a missing endpoint yields no
/// rows. The relationship type is embedded in the text; [`RelationshipType`]
/// only holds identifier-shaped names.
pub fn merge_relationship_statement(from: &str, to: &str, rel_type: &RelationshipType) -> Statement {
    Statement::new(
        format!(
            "MATCH (from:Case {{id: $from}}) \
             MATCH (to:Case {{id: $to}}) \
             MERGE (from)-[r:{}]->(to) \
             ON CREATE SET r.weight = $weight \
             RETURN type(r) AS type",
            rel_type.as_str()
        ),
        Intent::MergeRelationship(rel_type.clone()),
    )
    .param("from", from)
    .param("to", to)
    .param("weight", DEFAULT_WEIGHT)
    .column("type", ColumnKind::Scalar)
}

/// Writes cases, principles and relationships into the graph
pub struct SchemaManager<S: GraphStore + ?Sized> {
    store: Arc<S>,
}

impl<S: GraphStore + ?Sized> SchemaManager<S> {
    /// Create a schema manager over a shared store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Declare uniqueness constraints on `Case.id` and `Principle.id`
    ///
    /// Safe to call repeatedly; existing constraints are left untouched.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        info!("Initializing graph schema");
        for &(name, label, property) in CONSTRAINTS {
            self.store
                .execute(&constraint_statement(name, label, property))
                .await?;
        }
        info!("Graph schema initialized");
        Ok(())
    }

    /// Upsert a case and link it to each of its principles
    pub async fn ingest_case(&self, case: &Case) -> Result<(), StoreError> {
        case.validate()?;

        self.store.execute(&merge_case_statement(case)).await?;

        for principle in case.principle_nodes() {
            debug!("Linking case {} to principle {}", case.id, principle.id);
            self.store
                .execute(&merge_principle_statement(&case.id, &principle))
                .await?;
        }

        info!("Ingested case: {} ({})", case.name, case.id);
        Ok(())
    }

    /// Upsert a typed edge between two cases
    ///
    /// Returns the number of edges touched: 1, or 0 when either case does not
    /// exist. A missing case is not an error.
    pub async fn create_relationship(
        &self,
        from: &str,
        to: &str,
        rel_type: &RelationshipType,
    ) -> Result<usize, StoreError> {
        let rows = self
            .store
            .execute(&merge_relationship_statement(from, to, rel_type))
            .await?;

        if rows.is_empty() {
            warn!(
                "Relationship {} -[{}]-> {} not created: case not found",
                from, rel_type, to
            );
        } else {
            info!("Created relationship: {} -[{}]-> {}", from, rel_type, to);
        }
        Ok(rows.len())
    }

    /// Parse a caller-supplied relationship type, then upsert the edge
    pub async fn create_relationship_str(
        &self,
        from: &str,
        to: &str,
        rel_type: &str,
    ) -> Result<usize, StoreError> {
        let rel_type = RelationshipType::parse(rel_type)?;
        self.create_relationship(from, to, &rel_type).await
    }
}
