//! Backend-neutral result rows

use precedent_domain::CaseAttributes;
use std::collections::BTreeMap;

/// A node returned by a statement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeValue {
    /// Node labels
    pub labels: Vec<String>,
    /// Node properties
    pub attributes: CaseAttributes,
}

impl NodeValue {
    /// Create a node with a single label
    pub fn new(label: impl Into<String>, attributes: CaseAttributes) -> Self {
        Self {
            labels: vec![label.into()],
            attributes,
        }
    }
}

/// A value bound to an output column
#[derive(Debug, Clone, PartialEq)]
pub enum GraphValue {
    /// Missing value, e.g. from an unmatched OPTIONAL MATCH
    Null,
    /// Scalar value
    Scalar(serde_json::Value),
    /// Node with labels and attributes
    Node(NodeValue),
    /// List of values
    List(Vec<GraphValue>),
}

impl GraphValue {
    /// Borrow as a node
    pub fn as_node(&self) -> Option<&NodeValue> {
        match self {
            GraphValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Borrow as a list
    pub fn as_list(&self) -> Option<&[GraphValue]> {
        match self {
            GraphValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as a scalar
    pub fn as_scalar(&self) -> Option<&serde_json::Value> {
        match self {
            GraphValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Whether this is [`GraphValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, GraphValue::Null)
    }
}

/// One result row: output column name to value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: BTreeMap<String, GraphValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style
    pub fn with(mut self, name: impl Into<String>, value: GraphValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind a value to a column
    pub fn insert(&mut self, name: impl Into<String>, value: GraphValue) {
        self.values.insert(name.into(), value);
    }

    /// Value bound to `name`
    pub fn get(&self, name: &str) -> Option<&GraphValue> {
        self.values.get(name)
    }

    /// Column names present in this row
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
