use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::schema::{ExtractionParams, RawResult};

#[derive(Serialize)]
struct ExtractRequest<'a> {
    url: &'a str,
    instruction: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'a Value>,
    #[serde(flatten)]
    params: &'a ExtractionParams,
}

/// Client for the LLM extraction service. One request per page, exactly
/// one attempt: any retry policy belongs in a wrapper around this client,
/// not inside it.
#[derive(Clone)]
pub struct ExtractionClient {
    base_url: String,
    instruction: String,
    schema: Option<Value>,
    params: ExtractionParams,
    client: reqwest::Client,
}

impl ExtractionClient {
    pub fn new(
        base_url: String,
        instruction: String,
        schema: Option<Value>,
        params: ExtractionParams,
    ) -> Self {
        Self {
            base_url,
            instruction,
            schema,
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn default() -> Self {
        Self::new(
            "http://localhost:11235".to_string(),
            crate::schema::KNOWLEDGE_GRAPH_INSTRUCTION.to_string(),
            Some(crate::schema::knowledge_graph_schema()),
            ExtractionParams::default(),
        )
    }

    pub async fn extract(&self, url: String) -> Result<RawResult> {
        let endpoint = format!("{}/extract", self.base_url);

        let request = ExtractRequest {
            url: &url,
            instruction: &self.instruction,
            schema: self.schema.as_ref(),
            params: &self.params,
        };

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .context("failed to reach extraction service")?;

        if !response.status().is_success() {
            anyhow::bail!("extraction service returned {}", response.status());
        }

        response
            .json()
            .await
            .context("failed to parse extraction response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_flattens_params() {
        let request = ExtractRequest {
            url: "https://example.com/a",
            instruction: "extract things",
            schema: None,
            params: &ExtractionParams::default(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["url"], "https://example.com/a");
        assert_eq!(value["chunk_token_threshold"], 800);
        assert_eq!(value["input_format"], "html");
        assert!(value.get("schema").is_none());
    }
}
