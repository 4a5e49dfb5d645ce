use serde::{Deserialize, Serialize};

/// One pipeline run's settings. Passed explicitly into the entry points so
/// independent runs can carry independent configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source_feed_url: String,
    pub query: String,
    pub top_k: usize,
    pub min_score: f64,
    pub chunk_size: usize,
    pub step: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_feed_url: String::new(),
            query: "economic indicators, inflation, consumer confidence, \
                    interest rates, tariffs, recession"
                .to_string(),
            top_k: 5,
            min_score: 0.05,
            chunk_size: 100,
            step: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.min_score, 0.05);
        assert_eq!(config.chunk_size, 100);
        assert_eq!(config.step, 50);
        assert!(config.step < config.chunk_size);
    }
}
