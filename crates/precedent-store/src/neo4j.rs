//! Neo4j backend
//!
//! The Bolt connection pool is created on the first executed statement and
//! kept for the lifetime of the store. Share one `Neo4jStore` per process
//! through an `Arc`; the pool is closed when the last handle is dropped at
//! shutdown. Each statement checks a connection out of the pool and returns
//! it when the result stream is dropped, on success and failure alike.

use crate::config::GraphConfig;
use crate::row::{GraphValue, NodeValue, Row};
use crate::statement::{ColumnKind, Param, Statement};
use crate::{GraphStore, StoreError};
use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Query};
use precedent_domain::CaseAttributes;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Graph store backed by a Neo4j server
pub struct Neo4jStore {
    config: GraphConfig,
    graph: OnceCell<Graph>,
}

impl Neo4jStore {
    /// Create a store; no connection is opened until first use
    pub fn new(config: GraphConfig) -> Result<Self, StoreError> {
        config.validate().map_err(StoreError::Config)?;
        Ok(Self {
            config,
            graph: OnceCell::new(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Whether the pool has been created yet
    pub fn is_connected(&self) -> bool {
        self.graph.initialized()
    }

    async fn graph(&self) -> Result<&Graph, StoreError> {
        self.graph
            .get_or_try_init(|| async {
                info!("Opening Neo4j connection pool to {}", self.config.uri);
                let neo4j_config = ConfigBuilder::default()
                    .uri(self.config.uri.as_str())
                    .user(self.config.user.as_str())
                    .password(self.config.password.as_str())
                    .db(self.config.database.as_str())
                    .max_connections(self.config.max_connections)
                    .build()
                    .map_err(|e| StoreError::Config(e.to_string()))?;

                Graph::connect(neo4j_config).await.map_err(classify)
            })
            .await
    }

    async fn run(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
        let graph = self.graph().await?;

        let mut stream = graph.execute(to_query(statement)).await.map_err(classify)?;

        let mut rows = Vec::new();
        while let Some(record) = stream.next().await.map_err(classify)? {
            rows.push(normalize(&record, statement)?);
        }
        Ok(rows)
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
        debug!(
            intent = %statement.intent(),
            params = ?statement.params().keys().collect::<Vec<_>>(),
            "Executing statement"
        );

        match self.config.query_timeout() {
            Some(limit) => tokio::time::timeout(limit, self.run(statement))
                .await
                .map_err(|_| StoreError::Timeout(limit))?,
            None => self.run(statement).await,
        }
    }
}

fn to_query(statement: &Statement) -> Query {
    let mut query = neo4rs::query(statement.text());
    for (name, value) in statement.params() {
        query = match value {
            Param::String(s) => query.param(name, s.clone()),
            Param::Int(i) => query.param(name, *i),
            Param::Float(f) => query.param(name, *f),
            Param::StringList(items) => query.param(name, items.clone()),
        };
    }
    query
}

fn classify(err: neo4rs::Error) -> StoreError {
    match err {
        neo4rs::Error::AuthenticationError(detail) => StoreError::Authentication(detail),
        neo4rs::Error::ConnectionError => {
            StoreError::Connection("connection to the graph engine failed".to_string())
        }
        neo4rs::Error::IOError { detail } => StoreError::Connection(detail.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

fn normalize(record: &neo4rs::Row, statement: &Statement) -> Result<Row, StoreError> {
    let mut row = Row::new();

    for column in statement.columns() {
        let name = column.name.as_str();
        let value = match column.kind {
            ColumnKind::Scalar => {
                let value: serde_json::Value = record.get(name).map_err(|e| decode(name, e))?;
                if value.is_null() {
                    GraphValue::Null
                } else {
                    GraphValue::Scalar(value)
                }
            }
            ColumnKind::Node => {
                let node: neo4rs::Node = record.get(name).map_err(|e| decode(name, e))?;
                GraphValue::Node(node_value(&node)?)
            }
            ColumnKind::NodeList => {
                // collect() never yields nulls, so the list holds nodes only
                let nodes: Vec<neo4rs::Node> = record.get(name).map_err(|e| decode(name, e))?;
                GraphValue::List(
                    nodes
                        .iter()
                        .map(|node| node_value(node).map(GraphValue::Node))
                        .collect::<Result<_, _>>()?,
                )
            }
        };
        row.insert(name, value);
    }

    Ok(row)
}

fn node_value(node: &neo4rs::Node) -> Result<NodeValue, StoreError> {
    let mut attributes = CaseAttributes::new();
    for key in node.keys() {
        let value: serde_json::Value = node.get(&*key).map_err(|e| decode(&*key, e))?;
        attributes.insert(key.to_string(), value);
    }

    Ok(NodeValue {
        labels: node.labels().iter().map(|l| l.to_string()).collect(),
        attributes,
    })
}

fn decode(column: &str, err: impl std::fmt::Display) -> StoreError {
    StoreError::Decode(format!("column '{}': {}", column, err))
}
