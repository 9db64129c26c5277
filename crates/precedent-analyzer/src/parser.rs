//! Parse LLM output into query hints

use crate::error::AnalyzerError;
use precedent_domain::Hints;
use serde_json::Value;
use tracing::debug;

/// Parse an LLM analysis response into hints
///
/// Accepts the response with or without a markdown code fence. Missing or
/// null `principles`/`keywords` fields yield empty lists; entries are
/// trimmed and blank or non-string entries dropped. Any other field, such
/// as `relationshipType`, is ignored.
pub fn parse_analysis(response: &str) -> Result<Hints, AnalyzerError> {
    let json_str = extract_json(response);

    // An empty completion carries no hints but is not malformed
    if json_str.is_empty() {
        debug!("Empty analysis response");
        return Ok(Hints::default());
    }

    let json: Value = serde_json::from_str(json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| AnalyzerError::InvalidFormat("Expected JSON object".to_string()))?;

    Ok(Hints {
        principles: string_list(obj.get("principles"), "principles")?,
        keywords: string_list(obj.get("keywords"), "keywords")?,
    })
}

/// Extract JSON from response, removing a markdown code fence if present
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") up to the end of the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches("json"),
    };

    body.trim_end().trim_end_matches("```").trim()
}

fn string_list(value: Option<&Value>, field: &str) -> Result<Vec<String>, AnalyzerError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()),
        Some(other) => Err(AnalyzerError::InvalidFormat(format!(
            "'{}' must be a list, got {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json() {
        let response = r#"{
            "principles": ["Federalism", "Stare Decisis"],
            "keywords": ["abortion", "overruled"],
            "relationshipType": null
        }"#;

        let hints = parse_analysis(response).unwrap();
        assert_eq!(hints.principles, vec!["Federalism", "Stare Decisis"]);
        assert_eq!(hints.keywords, vec!["abortion", "overruled"]);
    }

    #[test]
    fn test_parse_json_in_markdown() {
        let response = "```json\n{\"principles\": [\"Data Privacy\"], \"keywords\": []}\n```";

        let hints = parse_analysis(response).unwrap();
        assert_eq!(hints.principles, vec!["Data Privacy"]);
        assert!(hints.keywords.is_empty());
    }

    #[test]
    fn test_parse_fence_without_newlines() {
        let hints = parse_analysis("```json{\"keywords\": [\"hipaa\"]}```").unwrap();
        assert_eq!(hints.keywords, vec!["hipaa"]);
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let hints = parse_analysis(r#"{"principles": null}"#).unwrap();
        assert_eq!(hints, Hints::default());
    }

    #[test]
    fn test_blank_entries_dropped() {
        let hints = parse_analysis(r#"{"principles": [" Due Process ", "", 7], "keywords": ["  "]}"#)
            .unwrap();
        assert_eq!(hints.principles, vec!["Due Process"]);
        assert!(hints.keywords.is_empty());
    }

    #[test]
    fn test_empty_response_is_empty_hints() {
        assert_eq!(parse_analysis("   ").unwrap(), Hints::default());
    }

    #[test]
    fn test_prose_is_parse_error() {
        let result = parse_analysis("The query concerns privacy law.");
        assert!(matches!(result, Err(AnalyzerError::JsonParse(_))));
    }

    #[test]
    fn test_non_object_is_invalid_format() {
        let result = parse_analysis(r#"["Federalism"]"#);
        assert!(matches!(result, Err(AnalyzerError::InvalidFormat(_))));
    }

    #[test]
    fn test_non_list_field_is_invalid_format() {
        let result = parse_analysis(r#"{"principles": "Federalism"}"#);
        assert!(matches!(result, Err(AnalyzerError::InvalidFormat(_))));
    }
}
