//! LLM prompt contract for query analysis

/// System instruction sent with every analysis call
pub const SYSTEM_INSTRUCTION: &str = "You are a legal research assistant. Analyze queries and extract legal concepts, principles, and relationships. Always respond with valid JSON only, no markdown formatting.";

const ANALYSIS_INSTRUCTIONS: &str = "Analyze this legal research query and extract key information.";

const OUTPUT_FORMAT: &str = r#"Respond ONLY with valid JSON in this exact format (no markdown, no code blocks, just raw JSON):
{
  "principles": ["list", "of", "legal", "principles"],
  "keywords": ["important", "keywords"],
  "relationshipType": null
}

Only include principles if they are clearly legal concepts mentioned in the query."#;

/// Builds the per-query analysis prompt
pub struct PromptBuilder<'a> {
    query: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for a raw user query
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // The query is quoted verbatim; it is data, not instructions
        prompt.push_str(&format!("Query: \"{}\"\n\n", self.query));

        prompt.push_str(OUTPUT_FORMAT);
        prompt
    }
}
