//! Search response payload

use crate::analysis::Hints;
use serde::{Deserialize, Serialize};

/// Attribute map of a Case node as stored in the graph
pub type CaseAttributes = serde_json::Map<String, serde_json::Value>;

/// Result of a precedent search
///
/// `related_cases` is the concatenation of every matched case's related
/// cases. A case related to two matched cases appears twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Attributes of each matched case
    pub cases: Vec<CaseAttributes>,

    /// Attributes of cases reached through a traversable relationship
    pub related_cases: Vec<CaseAttributes>,

    /// Hints the search was built from
    pub analysis: Hints,
}

impl SearchResponse {
    /// A response with no matches
    pub fn empty(analysis: Hints) -> Self {
        Self {
            cases: Vec::new(),
            related_cases: Vec::new(),
            analysis,
        }
    }

    /// Ids of the matched cases, in result order
    pub fn case_ids(&self) -> Vec<&str> {
        ids(&self.cases)
    }

    /// Ids of the related cases, in result order
    pub fn related_case_ids(&self) -> Vec<&str> {
        ids(&self.related_cases)
    }
}

fn ids(attributes: &[CaseAttributes]) -> Vec<&str> {
    attributes
        .iter()
        .filter_map(|a| a.get("id").and_then(|v| v.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut response = SearchResponse::empty(Hints::with_principles(["Federalism"]));
        response
            .related_cases
            .push(json!({"id": "roe_v_wade_1973"}).as_object().unwrap().clone());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["cases"], json!([]));
        assert_eq!(value["relatedCases"][0]["id"], "roe_v_wade_1973");
        assert_eq!(value["analysis"]["principles"], json!(["Federalism"]));
        assert_eq!(value["analysis"]["keywords"], json!([]));
    }

    #[test]
    fn test_case_ids() {
        let response = SearchResponse {
            cases: vec![
                json!({"id": "a"}).as_object().unwrap().clone(),
                json!({"name": "no id"}).as_object().unwrap().clone(),
            ],
            related_cases: Vec::new(),
            analysis: Hints::default(),
        };
        assert_eq!(response.case_ids(), vec!["a"]);
        assert!(response.related_case_ids().is_empty());
    }
}
