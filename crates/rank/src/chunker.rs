pub struct ChunkerConfig {
    pub chunk_size: usize,
    pub step: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            step: 50,
        }
    }
}

pub struct WindowChunker {
    config: ChunkerConfig,
}

impl WindowChunker {
    /// Panics if `step` is zero or not smaller than `chunk_size`.
    pub fn new(config: ChunkerConfig) -> Self {
        assert!(config.step > 0, "chunker step must be positive");
        assert!(
            config.step < config.chunk_size,
            "chunker step must be smaller than chunk_size"
        );
        Self { config }
    }

    /// Slide a window of `chunk_size` words over `text` with stride `step`.
    /// The last chunk may be shorter than `chunk_size`.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut chunks = Vec::new();

        let mut start = 0;
        while start < words.len() {
            let end = (start + self.config.chunk_size).min(words.len());
            chunks.push(words[start..end].join(" "));
            start += self.config.step;
        }

        chunks
    }
}

impl Default for WindowChunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}
