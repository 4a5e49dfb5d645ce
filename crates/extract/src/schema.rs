use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Raw reply from the extraction service, before content normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResult {
    pub success: bool,
    #[serde(default)]
    pub extracted_content: Option<Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Tuning knobs forwarded to the extraction service.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionParams {
    pub chunk_token_threshold: usize,
    pub temperature: f64,
    pub max_tokens: usize,
    pub input_format: String,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            chunk_token_threshold: 800,
            temperature: 0.1,
            max_tokens: 1000,
            input_format: "html".to_string(),
        }
    }
}

/// Per-page outcome: parsed data on success, the failure reason otherwise.
/// Exactly one of `data` / `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageExtraction {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageExtraction {
    pub fn ok(url: impl Into<String>, data: Value) -> Self {
        Self {
            url: url.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

pub const KNOWLEDGE_GRAPH_INSTRUCTION: &str =
    "Extract entities and relationships from the content. Return valid JSON.";

pub const INSIGHTS_INSTRUCTION: &str = "Extract only key economic insights: inflation %, \
interest rates, recession indicators, consumer sentiment. Return as valid JSON. No boilerplate.";

/// JSON schema for knowledge-graph extraction: named entities plus typed
/// relationships between pairs of them.
pub fn knowledge_graph_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "entities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "description"]
                }
            },
            "relationships": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "entity1": { "type": "string" },
                        "entity2": { "type": "string" },
                        "description": { "type": "string" },
                        "relation_type": { "type": "string" }
                    },
                    "required": ["entity1", "entity2", "description", "relation_type"]
                }
            }
        },
        "required": ["entities", "relationships"]
    })
}
