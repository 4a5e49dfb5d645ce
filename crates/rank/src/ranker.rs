use serde::Serialize;
use tracing::debug;

use crate::chunker::{ChunkerConfig, WindowChunker};
use crate::scorer::RelevanceScorer;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    pub url: String,
    pub score: f64,
}

pub struct PageRanker {
    chunker: WindowChunker,
    scorer: RelevanceScorer,
    top_k: usize,
    min_score: f64,
}

impl PageRanker {
    pub fn new(chunker_config: ChunkerConfig, top_k: usize, min_score: f64) -> Self {
        Self {
            chunker: WindowChunker::new(chunker_config),
            scorer: RelevanceScorer::new(),
            top_k,
            min_score,
        }
    }

    /// Page score is the max over its chunk scores. Pages with no usable
    /// text are skipped, never fatal to the batch.
    pub fn score_page(&self, query: &str, text: &str) -> Option<f64> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            return None;
        }
        let scored = self.scorer.score(query, &chunks);
        Some(scored.iter().map(|(_, s)| *s).fold(0.0_f64, f64::max))
    }

    /// Rank `(url, full_text)` pages against the query: score each page,
    /// drop those at or below the threshold, sort descending, keep top-K.
    pub fn rank(&self, pages: &[(String, String)], query: &str) -> Vec<RankedPage> {
        let mut scored = Vec::new();
        for (url, text) in pages {
            match self.score_page(query, text) {
                Some(score) => {
                    debug!(url = %url, score, "scored page");
                    scored.push(RankedPage {
                        url: url.clone(),
                        score,
                    });
                }
                None => debug!(url = %url, "no usable text, skipping"),
            }
        }
        select_top(scored, self.min_score, self.top_k)
    }
}

/// Threshold filter + stable descending sort + top-K truncation.
/// Ties keep their input order.
pub fn select_top(mut pages: Vec<RankedPage>, min_score: f64, top_k: usize) -> Vec<RankedPage> {
    pages.retain(|p| p.score > min_score);
    pages.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pages.truncate(top_k);
    pages
}
