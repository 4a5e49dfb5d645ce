use anyhow::{Context, Result, bail};
use serde_json::Value;

/// The extraction service returns its content in one of two shapes: a JSON
/// string, or a chat-completion object whose payload sits at
/// `choices[0].message.content`. Classification happens once, here, instead
/// of shape-probing at the use sites.
#[derive(Debug, Clone, PartialEq)]
pub enum RawContent {
    PlainJsonText(String),
    ChatCompletionShaped(String),
}

impl RawContent {
    pub fn classify(value: &Value) -> Result<Self> {
        if let Some(text) = value.as_str() {
            return Ok(Self::PlainJsonText(text.to_string()));
        }

        if let Some(text) = value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
        {
            return Ok(Self::ChatCompletionShaped(text.to_string()));
        }

        bail!("unsupported LLM response format")
    }

    /// Parse the carried text as JSON.
    pub fn parse(self) -> Result<Value> {
        let text = match self {
            Self::PlainJsonText(text) | Self::ChatCompletionShaped(text) => text,
        };
        serde_json::from_str(&text).context("extracted content is not valid JSON")
    }
}

/// Normalize whatever the service handed back into a parsed JSON value.
pub fn normalize_content(content: Option<Value>) -> Result<Value> {
    let value = content.context("extraction succeeded but returned no content")?;
    RawContent::classify(&value)?.parse()
}
