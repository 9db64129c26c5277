//! Traversal query builder
//!
//! Pure translation of [`Hints`] into a bounded traversal [`Statement`].

use precedent_domain::{Hints, RelationshipType};
use precedent_store::{ColumnKind, Intent, Statement};

/// Maximum number of matched cases returned by one search
pub const MAX_RESULTS: usize = 10;

/// Output column bound to each matched Case node
pub const CASE_COLUMN: &str = "c";

/// Output column bound to the related cases of each match
pub const RELATED_COLUMN: &str = "relatedCases";

/// Builds the traversal statement for a search
#[derive(Debug, Clone, Default)]
pub struct TraversalQueryBuilder;

impl TraversalQueryBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self
    }

    /// Build the statement for `hints`
    ///
    /// Principle names are bound as `$principles`, never embedded. The only
    /// text spliced into the query is the fixed set of
    /// [`RelationshipType::TRAVERSABLE`] names.
    pub fn build(&self, hints: &Hints) -> Statement {
        let follow = RelationshipType::TRAVERSABLE.to_vec();
        let filter_by_principle = hints.has_principles();

        let mut text = String::from("MATCH (c:Case)");

        if filter_by_principle {
            text.push_str(
                "\nMATCH (c)-[:INVOLVES_PRINCIPLE]->(p:Principle)\nWHERE p.name IN $principles",
            );
        }

        let types = follow
            .iter()
            .map(RelationshipType::as_str)
            .collect::<Vec<_>>()
            .join("|");
        text.push_str(&format!(
            "\nOPTIONAL MATCH (c)-[:{}]->(related:Case)\nRETURN c, collect(DISTINCT related) AS {}\nLIMIT {}",
            types, RELATED_COLUMN, MAX_RESULTS
        ));

        let statement = Statement::new(
            text,
            Intent::Traverse {
                follow,
                filter_by_principle,
                limit: MAX_RESULTS,
            },
        )
        .column(CASE_COLUMN, ColumnKind::Node)
        .column(RELATED_COLUMN, ColumnKind::NodeList);

        if filter_by_principle {
            statement.param("principles", hints.principles.clone())
        } else {
            statement
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_store::Param;

    #[test]
    fn test_no_principles_means_no_filter() {
        let stmt = TraversalQueryBuilder::new().build(&Hints::fallback("privacy law"));

        assert!(!stmt.text().contains("INVOLVES_PRINCIPLE"));
        assert!(!stmt.text().contains("$principles"));
        assert!(stmt.params().is_empty());
    }

    #[test]
    fn test_principles_are_bound_not_embedded() {
        let hints = Hints::with_principles(["Federalism", "Stare Decisis"]);
        let stmt = TraversalQueryBuilder::new().build(&hints);

        assert!(stmt.text().contains("WHERE p.name IN $principles"));
        assert!(!stmt.text().contains("Federalism"));
        assert_eq!(
            stmt.get_param("principles").and_then(Param::as_list),
            Some(&["Federalism".to_string(), "Stare Decisis".to_string()][..])
        );
    }

    #[test]
    fn test_follows_allow_listed_types_only() {
        let stmt = TraversalQueryBuilder::new().build(&Hints::default());

        assert!(stmt
            .text()
            .contains("OPTIONAL MATCH (c)-[:CITES|OVERRULES|APPLIES_TO]->(related:Case)"));
        assert!(stmt.text().ends_with("LIMIT 10"));
        assert_eq!(
            stmt.intent(),
            &Intent::Traverse {
                follow: RelationshipType::TRAVERSABLE.to_vec(),
                filter_by_principle: false,
                limit: MAX_RESULTS,
            }
        );
    }

    #[test]
    fn test_declares_output_columns() {
        let stmt = TraversalQueryBuilder::new().build(&Hints::default());
        let columns: Vec<_> = stmt.columns().iter().map(|c| (c.name.as_str(), c.kind)).collect();
        assert_eq!(
            columns,
            vec![("c", ColumnKind::Node), ("relatedCases", ColumnKind::NodeList)]
        );
    }
}
