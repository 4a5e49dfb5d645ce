pub mod content;
pub mod llm;
pub mod schema;

pub use content::{RawContent, normalize_content};
pub use llm::ExtractionClient;
pub use schema::{ExtractionParams, PageExtraction, RawResult};

use anyhow::Result;
use tracing::warn;

/// Run extraction over the ranked pages, one boundary call per page.
/// A page's failure (transport error, unsuccessful crawl, unparsable
/// content) becomes its `error` record; the batch always completes and the
/// output order mirrors `urls`.
pub async fn extract_all<F, Fut>(urls: &[String], request: F) -> Vec<PageExtraction>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<RawResult>>,
{
    let mut results = Vec::with_capacity(urls.len());

    for url in urls {
        let result = match request(url.clone()).await {
            Err(e) => {
                warn!(url = %url, error = %e, "extraction request failed");
                PageExtraction::failed(url.clone(), e.to_string())
            }
            Ok(raw) if !raw.success => {
                warn!(
                    url = %url,
                    error = raw.error_message.as_deref().unwrap_or("unknown"),
                    "extraction crawl failed"
                );
                PageExtraction::failed(url.clone(), "LLM crawl failed")
            }
            Ok(raw) => match normalize_content(raw.extracted_content) {
                Ok(data) => PageExtraction::ok(url.clone(), data),
                Err(e) => {
                    warn!(url = %url, error = %e, "extraction content unusable");
                    PageExtraction::failed(url.clone(), e.to_string())
                }
            },
        };
        results.push(result);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    fn success(content: Value) -> RawResult {
        RawResult {
            success: true,
            extracted_content: Some(content),
            error_message: None,
        }
    }

    #[tokio::test]
    async fn test_failed_crawl_yields_error_record() {
        let results = extract_all(&urls(&["https://example.com/a"]), |_| async {
            Ok(RawResult {
                success: false,
                extracted_content: None,
                error_message: Some("timeout".to_string()),
            })
        })
        .await;

        assert_eq!(results.len(), 1);
        assert!(results[0].data.is_none());
        assert_eq!(results[0].error.as_deref(), Some("LLM crawl failed"));
    }

    #[tokio::test]
    async fn test_transport_error_is_recovered_per_page() {
        let results = extract_all(&urls(&["https://example.com/a"]), |_| async {
            Err(anyhow::anyhow!("connection refused"))
        })
        .await;

        assert_eq!(results[0].error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_successful_extraction_carries_parsed_data() {
        let results = extract_all(&urls(&["https://example.com/a"]), |_| async {
            Ok(success(json!(r#"{"inflation": "2.4%"}"#)))
        })
        .await;

        assert!(results[0].error.is_none());
        assert_eq!(results[0].data.as_ref().unwrap()["inflation"], "2.4%");
    }

    #[tokio::test]
    async fn test_one_bad_page_never_aborts_the_batch() {
        let list = urls(&[
            "https://example.com/good",
            "https://example.com/bad",
            "https://example.com/ugly",
        ]);

        let results = extract_all(&list, |url| async move {
            if url.ends_with("good") {
                Ok(success(json!(r#"{"ok": true}"#)))
            } else if url.ends_with("bad") {
                Ok(success(json!("{ not json")))
            } else {
                Ok(success(json!({"unexpected": "shape"})))
            }
        })
        .await;

        // Order mirrors the input, success and failure interleaved.
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].url, "https://example.com/good");
        assert!(results[0].data.is_some());
        assert!(results[1].error.as_deref().unwrap().contains("not valid JSON"));
        assert!(
            results[2]
                .error
                .as_deref()
                .unwrap()
                .contains("unsupported LLM response format")
        );
    }
}
