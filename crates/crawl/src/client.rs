use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// What the render service reports for one page: cleaned text content
/// or a failure reason.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchOutcome {
    pub success: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FetchOutcome {
    /// Usable page text, if the fetch produced any.
    pub fn usable_text(self) -> Option<String> {
        if !self.success {
            return None;
        }
        self.text.filter(|t| !t.trim().is_empty())
    }
}

#[derive(Serialize)]
struct CrawlRequest<'a> {
    url: &'a str,
}

/// Client for the headless crawl/render sidecar.
#[derive(Clone)]
pub struct CrawlClient {
    base_url: String,
    client: reqwest::Client,
}

impl CrawlClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn default() -> Self {
        Self::new("http://localhost:11235".to_string())
    }

    /// One fetch attempt for one page. Transport and service errors are
    /// the caller's to recover from (skip the page, keep the batch going).
    pub async fn fetch_page(&self, url: &str) -> Result<FetchOutcome> {
        let endpoint = format!("{}/crawl", self.base_url);

        let response = self
            .client
            .post(&endpoint)
            .json(&CrawlRequest { url })
            .send()
            .await
            .context("failed to reach crawl service")?;

        if !response.status().is_success() {
            anyhow::bail!("crawl service returned {}", response.status());
        }

        response
            .json()
            .await
            .context("failed to parse crawl response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_text() {
        let outcome = FetchOutcome {
            success: true,
            text: Some("page body".to_string()),
            error: None,
        };
        assert_eq!(outcome.usable_text().as_deref(), Some("page body"));
    }

    #[test]
    fn test_failed_fetch_has_no_usable_text() {
        let outcome = FetchOutcome {
            success: false,
            text: Some("stale body".to_string()),
            error: Some("navigation timeout".to_string()),
        };
        assert!(outcome.usable_text().is_none());
    }

    #[test]
    fn test_blank_text_is_not_usable() {
        let outcome = FetchOutcome {
            success: true,
            text: Some("   \n".to_string()),
            error: None,
        };
        assert!(outcome.usable_text().is_none());
    }

    #[test]
    fn test_outcome_deserializes_with_missing_fields() {
        let outcome: FetchOutcome = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!outcome.success);
        assert!(outcome.text.is_none());
        assert!(outcome.error.is_none());
    }
}
