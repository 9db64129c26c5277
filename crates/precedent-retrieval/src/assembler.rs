//! Result assembler
//!
//! Flattens traversal rows into a [`SearchResponse`].

use crate::builder::{CASE_COLUMN, RELATED_COLUMN};
use precedent_domain::{CaseAttributes, Hints, SearchResponse};
use precedent_store::{GraphValue, Row};
use tracing::debug;

/// Shapes traversal rows into the search response
#[derive(Debug, Clone, Default)]
pub struct ResultAssembler;

impl ResultAssembler {
    /// Create an assembler
    pub fn new() -> Self {
        Self
    }

    /// Assemble rows into a response carrying `hints` unchanged
    ///
    /// Related cases are concatenated across rows in row order. A case related
    /// to several matched cases is listed once per match; nothing is
    /// deduplicated here. Null entries and rows without a case node are
    /// skipped.
    pub fn assemble(&self, rows: &[Row], hints: Hints) -> SearchResponse {
        let mut response = SearchResponse::empty(hints);

        for row in rows {
            match row.get(CASE_COLUMN).and_then(GraphValue::as_node) {
                Some(node) => response.cases.push(node.attributes.clone()),
                None => debug!("Row without a case node skipped"),
            }

            if let Some(related) = row.get(RELATED_COLUMN).and_then(GraphValue::as_list) {
                response
                    .related_cases
                    .extend(related.iter().filter_map(node_attributes));
            }
        }

        response
    }
}

fn node_attributes(value: &GraphValue) -> Option<CaseAttributes> {
    value.as_node().map(|node| node.attributes.clone())
}
