//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use precedent_domain::{CaseAttributes, SearchResponse};
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a search response.
    pub fn format_search(&self, response: &SearchResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Table => Ok(self.format_search_table(response)),
        }
    }

    fn format_search_table(&self, response: &SearchResponse) -> String {
        let mut out = String::new();

        let analysis = &response.analysis;
        out.push_str(&self.info(&format!(
            "Principles: {}",
            display_list(&analysis.principles)
        )));
        out.push('\n');
        out.push_str(&self.info(&format!("Keywords: {}", display_list(&analysis.keywords))));
        out.push_str("\n\n");

        if response.cases.is_empty() {
            out.push_str(&self.colorize("No cases found.", "yellow"));
            return out;
        }

        out.push_str(&self.colorize("Cases", "cyan"));
        out.push('\n');
        out.push_str(&self.format_cases_table(&response.cases));

        if !response.related_cases.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.colorize("Related cases", "cyan"));
            out.push('\n');
            out.push_str(&self.format_cases_table(&response.related_cases));
        }

        out
    }

    /// Format case attribute maps as a table.
    pub fn format_cases_table(&self, cases: &[CaseAttributes]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Year", "Court", "Summary"]);

        for case in cases {
            builder.push_record([
                attribute(case, "id"),
                attribute(case, "name"),
                attribute(case, "year"),
                attribute(case, "court"),
                truncate(&attribute(case, "summary"), 60),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn attribute(case: &CaseAttributes, key: &str) -> String {
    match case.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_domain::Hints;
    use serde_json::json;

    fn create_test_response() -> SearchResponse {
        let mut response = SearchResponse::empty(Hints::with_principles(["Federalism"]));
        response.cases.push(
            json!({"id": "dobbs_v_jackson_2022", "name": "Dobbs v. Jackson", "year": 2022, "court": "Supreme Court", "summary": "s"})
                .as_object()
                .unwrap()
                .clone(),
        );
        response.related_cases.push(
            json!({"id": "roe_v_wade_1973", "name": "Roe v. Wade", "year": 1973})
                .as_object()
                .unwrap()
                .clone(),
        );
        response
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_search(&create_test_response()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["cases"][0]["id"], "dobbs_v_jackson_2022");
        assert_eq!(value["relatedCases"][0]["id"], "roe_v_wade_1973");
        assert_eq!(value["analysis"]["principles"][0], "Federalism");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_search(&create_test_response()).unwrap();

        assert!(output.contains("Principles: Federalism"));
        assert!(output.contains("Keywords: (none)"));
        assert!(output.contains("Related cases"));
        assert!(output.contains("2022"));
        assert!(output.contains("Roe v. Wade"));
    }

    #[test]
    fn test_empty_response() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_search(&SearchResponse::empty(Hints::default()))
            .unwrap();
        assert!(output.contains("No cases found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
