//! In-memory graph backend
//!
//! Executes each statement by its [`Intent`] against a small graph held in
//! process memory. Merge semantics follow the Neo4j backend: cases and
//! principles are keyed by id, edges by `(from, to, type)`.

use crate::row::{GraphValue, NodeValue, Row};
use crate::statement::{Intent, Param, Statement};
use crate::{GraphStore, StoreError};
use async_trait::async_trait;
use precedent_domain::{CaseAttributes, RelationshipType};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct MemoryGraph {
    constraints: BTreeSet<(String, String)>,
    cases: BTreeMap<String, CaseAttributes>,
    principles: BTreeMap<String, String>,
    involves: BTreeSet<(String, String)>,
    edges: BTreeMap<(String, String, String), f64>,
}

/// Graph store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    graph: Mutex<MemoryGraph>,
}

impl MemoryStore {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryGraph>, StoreError> {
        self.graph
            .lock()
            .map_err(|_| StoreError::Query("in-memory graph lock poisoned".to_string()))
    }

    /// Number of Case nodes
    pub fn case_count(&self) -> usize {
        self.lock().map(|g| g.cases.len()).unwrap_or(0)
    }

    /// Number of Principle nodes
    pub fn principle_count(&self) -> usize {
        self.lock().map(|g| g.principles.len()).unwrap_or(0)
    }

    /// Attributes of the Case node with this id
    pub fn case(&self, id: &str) -> Option<CaseAttributes> {
        self.lock().ok()?.cases.get(id).cloned()
    }

    /// Display name of the Principle node with this id
    pub fn principle_name(&self, id: &str) -> Option<String> {
        self.lock().ok()?.principles.get(id).cloned()
    }

    /// Principle ids linked from a case
    pub fn principles_of(&self, case_id: &str) -> Vec<String> {
        self.lock()
            .map(|g| {
                g.involves
                    .iter()
                    .filter(|(case, _)| case == case_id)
                    .map(|(_, principle)| principle.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of `rel_type` edges from `from` to `to` (0 or 1)
    pub fn relationship_count(&self, from: &str, to: &str, rel_type: &RelationshipType) -> usize {
        let key = (from.to_string(), to.to_string(), rel_type.as_str().to_string());
        self.lock()
            .map(|g| usize::from(g.edges.contains_key(&key)))
            .unwrap_or(0)
    }

    /// Weight of an edge, if it exists
    pub fn relationship_weight(
        &self,
        from: &str,
        to: &str,
        rel_type: &RelationshipType,
    ) -> Option<f64> {
        let key = (from.to_string(), to.to_string(), rel_type.as_str().to_string());
        self.lock().ok()?.edges.get(&key).copied()
    }

    /// Whether a uniqueness constraint exists on `label.property`
    pub fn has_constraint(&self, label: &str, property: &str) -> bool {
        self.lock()
            .map(|g| {
                g.constraints
                    .contains(&(label.to_string(), property.to_string()))
            })
            .unwrap_or(false)
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
        debug!(intent = %statement.intent(), "Executing statement in memory");
        let mut graph = self.lock()?;

        match statement.intent() {
            Intent::Probe => Ok(vec![Row::new().with(
                "message",
                GraphValue::Scalar(Value::from("Connected!")),
            )]),

            Intent::CreateConstraint { label, property } => {
                graph
                    .constraints
                    .insert((label.to_string(), property.to_string()));
                Ok(Vec::new())
            }

            Intent::MergeCase => {
                let id = text(statement, "id")?;
                let mut attributes = CaseAttributes::new();
                attributes.insert("id".to_string(), Value::from(id.clone()));
                for key in ["name", "year", "court", "summary", "fullText"] {
                    attributes.insert(key.to_string(), param(statement, key)?.to_json());
                }

                // SET overwrites scalars but keeps any other stored property
                graph.cases.entry(id).or_default().extend(attributes);
                Ok(Vec::new())
            }

            Intent::MergePrincipleLink => {
                let principle_id = text(statement, "principleId")?;
                let name = text(statement, "principleName")?;
                let case_id = text(statement, "caseId")?;

                graph.principles.insert(principle_id.clone(), name);
                if graph.cases.contains_key(&case_id) {
                    graph.involves.insert((case_id, principle_id));
                }
                Ok(Vec::new())
            }

            Intent::MergeRelationship(rel_type) => {
                let from = text(statement, "from")?;
                let to = text(statement, "to")?;
                let weight = match param(statement, "weight")? {
                    Param::Float(w) => *w,
                    Param::Int(w) => *w as f64,
                    other => {
                        return Err(StoreError::Query(format!(
                            "parameter $weight must be numeric, got {:?}",
                            other
                        )))
                    }
                };

                if !graph.cases.contains_key(&from) || !graph.cases.contains_key(&to) {
                    return Ok(Vec::new());
                }

                graph
                    .edges
                    .entry((from, to, rel_type.as_str().to_string()))
                    .or_insert(weight);
                Ok(vec![Row::new().with(
                    "type",
                    GraphValue::Scalar(Value::from(rel_type.as_str())),
                )])
            }

            Intent::Traverse {
                follow,
                filter_by_principle,
                limit,
            } => {
                let wanted: Option<BTreeSet<&str>> = if *filter_by_principle {
                    let names = param(statement, "principles")?.as_list().ok_or_else(|| {
                        StoreError::Query("parameter $principles must be a list".to_string())
                    })?;
                    Some(names.iter().map(String::as_str).collect())
                } else {
                    None
                };

                Ok(traverse(&graph, follow, wanted.as_ref(), *limit))
            }
        }
    }
}

fn traverse(
    graph: &MemoryGraph,
    follow: &[RelationshipType],
    wanted: Option<&BTreeSet<&str>>,
    limit: usize,
) -> Vec<Row> {
    let follow: BTreeSet<&str> = follow.iter().map(RelationshipType::as_str).collect();

    graph
        .cases
        .iter()
        .filter(|(id, _)| match wanted {
            None => true,
            Some(names) => graph.involves.iter().any(|(case, principle)| {
                case == *id
                    && graph
                        .principles
                        .get(principle)
                        .is_some_and(|name| names.contains(name.as_str()))
            }),
        })
        .take(limit)
        .map(|(id, attributes)| {
            let related: BTreeSet<&str> = graph
                .edges
                .keys()
                .filter(|(from, _, rel)| from == id && follow.contains(rel.as_str()))
                .map(|(_, to, _)| to.as_str())
                .collect();

            let related = related
                .into_iter()
                .filter_map(|to| graph.cases.get(to))
                .map(|attrs| GraphValue::Node(NodeValue::new("Case", attrs.clone())))
                .collect();

            Row::new()
                .with("c", GraphValue::Node(NodeValue::new("Case", attributes.clone())))
                .with("relatedCases", GraphValue::List(related))
        })
        .collect()
}

fn param<'a>(statement: &'a Statement, name: &str) -> Result<&'a Param, StoreError> {
    statement
        .get_param(name)
        .ok_or_else(|| StoreError::Query(format!("missing parameter ${}", name)))
}

fn text(statement: &Statement, name: &str) -> Result<String, StoreError> {
    param(statement, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| StoreError::Query(format!("parameter ${} must be a string", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe() {
        let store = MemoryStore::new();
        let rows = store.execute(&Statement::probe()).await.unwrap();
        assert_eq!(
            rows[0].get("message").and_then(GraphValue::as_scalar),
            Some(&Value::from("Connected!"))
        );
        assert!(store.ping().await);
    }

    #[tokio::test]
    async fn test_merge_case_missing_param_is_query_error() {
        let store = MemoryStore::new();
        let stmt = Statement::new("MERGE (c:Case {id: $id})", Intent::MergeCase).param("id", "a");

        let err = store.execute(&stmt).await.unwrap_err();
        assert!(matches!(err, StoreError::Query(msg) if msg.contains("$name")));
        assert_eq!(store.case_count(), 0);
    }

    #[tokio::test]
    async fn test_traverse_requires_principles_param() {
        let store = MemoryStore::new();
        let stmt = Statement::new(
            "MATCH (c:Case)",
            Intent::Traverse {
                follow: RelationshipType::TRAVERSABLE.to_vec(),
                filter_by_principle: true,
                limit: 10,
            },
        );

        assert!(matches!(
            store.execute(&stmt).await,
            Err(StoreError::Query(_))
        ));
    }

    #[tokio::test]
    async fn test_traverse_empty_graph() {
        let store = MemoryStore::new();
        let stmt = Statement::new(
            "MATCH (c:Case)",
            Intent::Traverse {
                follow: Vec::new(),
                filter_by_principle: false,
                limit: 10,
            },
        );
        assert!(store.execute(&stmt).await.unwrap().is_empty());
    }
}
