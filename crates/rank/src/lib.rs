pub mod chunker;
pub mod ranker;
pub mod scorer;

pub use chunker::{ChunkerConfig, WindowChunker};
pub use ranker::{PageRanker, RankedPage, select_top};
pub use scorer::RelevanceScorer;
