use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crawl::CrawlClient;
use extract::{ExtractionClient, PageExtraction};
use rank::{ChunkerConfig, PageRanker, RankedPage};

use crate::config::PipelineConfig;

pub struct RunSummary {
    pub links_found: usize,
    pub pages_fetched: usize,
    pub ranked: Vec<RankedPage>,
    pub results: Vec<PageExtraction>,
}

/// Full pipeline: discover links, fetch each page once, rank by relevance,
/// extract the top-K, write the results artifact. Page-level failures are
/// logged and skipped; only link discovery and the artifact write are fatal.
pub async fn run(
    config: &PipelineConfig,
    crawler: &CrawlClient,
    llm: &ExtractionClient,
    output: &Path,
) -> Result<RunSummary> {
    let links = crawl::fetch_article_links(&config.source_feed_url).await?;

    let mut pages: Vec<(String, String)> = Vec::new();
    for link in &links {
        info!("crawling {}", link);
        match crawler.fetch_page(link).await {
            Ok(outcome) => {
                let error = outcome.error.clone();
                match outcome.usable_text() {
                    Some(text) => pages.push((link.clone(), text)),
                    None => warn!(
                        url = %link,
                        reason = error.as_deref().unwrap_or("no usable text"),
                        "skipping page"
                    ),
                }
            }
            Err(e) => warn!(url = %link, error = %e, "fetch failed, skipping page"),
        }
    }

    let ranker = PageRanker::new(
        ChunkerConfig {
            chunk_size: config.chunk_size,
            step: config.step,
        },
        config.top_k,
        config.min_score,
    );
    let ranked = ranker.rank(&pages, &config.query);

    let urls: Vec<String> = ranked.iter().map(|p| p.url.clone()).collect();
    let results = extract::extract_all(&urls, |url| llm.extract(url)).await;

    let json = serde_json::to_string_pretty(&results)
        .context("failed to serialize extraction results")?;
    tokio::fs::write(output, json)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(RunSummary {
        links_found: links.len(),
        pages_fetched: pages.len(),
        ranked,
        results,
    })
}

/// Single-page knowledge-graph extraction. With only one page there is
/// nothing to degrade to, so a failed crawl is fatal here.
pub async fn harvest(llm: &ExtractionClient, url: String, output: &Path) -> Result<()> {
    let raw = llm.extract(url.clone()).await?;
    if !raw.success {
        anyhow::bail!(
            "extraction failed for {}: {}",
            url,
            raw.error_message.as_deref().unwrap_or("unknown error")
        );
    }

    let data = extract::normalize_content(raw.extracted_content)?;
    let json = serde_json::to_string_pretty(&data)?;
    tokio::fs::write(output, json)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}
