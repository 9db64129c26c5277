//! Parameterized graph statements
//!
//! A [`Statement`] is Cypher text, its bound parameters, the output columns
//! it returns, and an [`Intent`] naming which template produced it. The
//! Neo4j backend runs the text; the in-memory backend runs the intent
//! against the same parameters.

use precedent_domain::RelationshipType;
use std::collections::BTreeMap;
use std::fmt;

/// A bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Text
    String(String),
    /// Integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// List of strings
    StringList(Vec<String>),
}

impl Param {
    /// Borrow as a string, if this is a string parameter
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value, if this is an integer parameter
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Param::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Borrow as a string list, if this is a list parameter
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Param::StringList(items) => Some(items),
            _ => None,
        }
    }

    /// JSON representation, as stored on in-memory nodes
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Param::String(s) => serde_json::Value::from(s.as_str()),
            Param::Int(i) => serde_json::Value::from(*i),
            Param::Float(f) => serde_json::Value::from(*f),
            Param::StringList(items) => serde_json::Value::from(items.clone()),
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::String(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::String(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<Vec<String>> for Param {
    fn from(value: Vec<String>) -> Self {
        Param::StringList(value)
    }
}

/// Shape of an output column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// A scalar value
    Scalar,
    /// A single node
    Node,
    /// A list of nodes
    NodeList,
}

/// A named output column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Bound output name
    pub name: String,
    /// Value shape
    pub kind: ColumnKind,
}

/// Which statement template a [`Statement`] was built from
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Connectivity probe
    Probe,

    /// Uniqueness constraint on `label.property`
    CreateConstraint {
        /// Node label
        label: &'static str,
        /// Unique property
        property: &'static str,
    },

    /// Upsert a Case node from `$id, $name, $year, $court, $summary, $fullText`
    MergeCase,

    /// Upsert a Principle from `$principleId, $principleName` and link it to `$caseId`
    MergePrincipleLink,

    /// Upsert a typed edge between `$from` and `$to`
    MergeRelationship(RelationshipType),

    /// Match cases, optionally filtered by `$principles`, and collect related cases
    Traverse {
        /// Edge types followed from each matched case
        follow: Vec<RelationshipType>,
        /// Whether `$principles` filters the matched cases
        filter_by_principle: bool,
        /// Maximum matched cases
        limit: usize,
    },
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Probe => write!(f, "probe"),
            Intent::CreateConstraint { label, property } => {
                write!(f, "create-constraint({}.{})", label, property)
            }
            Intent::MergeCase => write!(f, "merge-case"),
            Intent::MergePrincipleLink => write!(f, "merge-principle-link"),
            Intent::MergeRelationship(rel) => write!(f, "merge-relationship({})", rel),
            Intent::Traverse { limit, .. } => write!(f, "traverse(limit {})", limit),
        }
    }
}

/// Query text plus bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    text: String,
    params: BTreeMap<String, Param>,
    columns: Vec<Column>,
    intent: Intent,
}

impl Statement {
    /// Create a statement with no parameters or output columns
    pub fn new(text: impl Into<String>, intent: Intent) -> Self {
        Self {
            text: text.into(),
            params: BTreeMap::new(),
            columns: Vec::new(),
            intent,
        }
    }

    /// Connectivity probe returning a single `message` column
    pub fn probe() -> Self {
        Self::new(r#"RETURN "Connected!" AS message"#, Intent::Probe)
            .column("message", ColumnKind::Scalar)
    }

    /// Bind a parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Param>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Declare an output column
    pub fn column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.push(Column {
            name: name.into(),
            kind,
        });
        self
    }

    /// Cypher text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound parameters, keyed by name
    pub fn params(&self) -> &BTreeMap<String, Param> {
        &self.params
    }

    /// Look up one parameter
    pub fn get_param(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    /// Output columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Template the statement came from
    pub fn intent(&self) -> &Intent {
        &self.intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_params_and_columns() {
        let stmt = Statement::new("MATCH (c:Case {id: $id}) RETURN c", Intent::MergeCase)
            .param("id", "roe_v_wade_1973")
            .param("year", 1973i64)
            .column("c", ColumnKind::Node);

        assert_eq!(stmt.get_param("id").and_then(Param::as_str), Some("roe_v_wade_1973"));
        assert_eq!(stmt.get_param("year").and_then(Param::as_i64), Some(1973));
        assert_eq!(stmt.columns()[0].name, "c");
        assert_eq!(stmt.columns()[0].kind, ColumnKind::Node);
    }

    #[test]
    fn test_probe() {
        let stmt = Statement::probe();
        assert_eq!(stmt.intent(), &Intent::Probe);
        assert!(stmt.params().is_empty());
        assert_eq!(stmt.columns().len(), 1);
    }

    #[test]
    fn test_param_to_json() {
        let list = Param::from(vec!["Federalism".to_string()]);
        assert_eq!(list.to_json(), serde_json::json!(["Federalism"]));
        assert_eq!(Param::from(1.0).to_json(), serde_json::json!(1.0));
        assert_eq!(list.as_list().map(|l| l.len()), Some(1));
    }
}
