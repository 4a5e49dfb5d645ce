use regex::Regex;
use std::collections::{HashMap, HashSet};

/// English stop words removed before weighting. Subset of the usual
/// IR list; single-character words are already dropped by the tokenizer.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
    "just", "may", "me", "might", "more", "most", "my", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your", "yours",
];

/// Scores chunks against a query by cosine similarity in a TF-IDF space
/// built over `[query] + chunks`. The vocabulary is local to one call:
/// each page is re-vectorized against the query on its own.
pub struct RelevanceScorer {
    token_re: Regex,
    stop_words: HashSet<&'static str>,
}

impl RelevanceScorer {
    pub fn new() -> Self {
        Self {
            token_re: Regex::new(r"\b\w\w+\b").unwrap(),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Returns (chunk, score) pairs positionally aligned with `chunks`,
    /// scores in [0, 1]. A corpus with no surviving vocabulary (all stop
    /// words, empty chunks) scores 0.0 everywhere.
    pub fn score(&self, query: &str, chunks: &[String]) -> Vec<(String, f64)> {
        let mut docs: Vec<Vec<String>> = Vec::with_capacity(chunks.len() + 1);
        docs.push(self.terms(query));
        for chunk in chunks {
            docs.push(self.terms(chunk));
        }

        // Document frequency over the joint corpus.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Smoothed inverse document frequency.
        let n_docs = docs.len() as f64;
        let idf: HashMap<&str, f64> = df
            .iter()
            .map(|(term, freq)| {
                (*term, ((1.0 + n_docs) / (1.0 + *freq as f64)).ln() + 1.0)
            })
            .collect();

        let vectors: Vec<HashMap<&str, f64>> =
            docs.iter().map(|doc| weigh(doc, &idf)).collect();

        let query_vec = &vectors[0];
        chunks
            .iter()
            .cloned()
            .zip(vectors[1..].iter().map(|v| dot(query_vec, v)))
            .collect()
    }

    /// Unigrams plus adjacent bigrams, lowercased, stop words removed.
    fn terms(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = self
            .token_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stop_words.contains(t.as_str()))
            .collect();

        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Term counts weighted by IDF, L2-normalized.
fn weigh<'a>(doc: &'a [String], idf: &HashMap<&'a str, f64>) -> HashMap<&'a str, f64> {
    let mut weights: HashMap<&'a str, f64> = HashMap::new();
    for term in doc {
        *weights.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    for (term, weight) in weights.iter_mut() {
        *weight *= idf.get(*term).copied().unwrap_or(0.0);
    }

    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }
    weights
}

/// Dot product of two L2-normalized sparse vectors, clamped against
/// floating-point drift above 1.0.
fn dot(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum::<f64>()
        .min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(chunks: &[&str]) -> Vec<String> {
        chunks.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_scores_are_aligned_and_bounded() {
        let scorer = RelevanceScorer::new();
        let chunks = owned(&[
            "inflation climbed sharply last quarter",
            "the weather was pleasant",
            "central banks raised interest rates to fight inflation",
        ]);
        let scored = scorer.score("inflation interest rates", &chunks);

        assert_eq!(scored.len(), chunks.len());
        for ((text, score), chunk) in scored.iter().zip(&chunks) {
            assert_eq!(text, chunk);
            assert!(*score >= 0.0 && *score <= 1.0, "score out of range: {score}");
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = RelevanceScorer::new();
        let chunks = owned(&["inflation data released", "unrelated gardening tips"]);
        let first = scorer.score("inflation", &chunks);
        let second = scorer.score("inflation", &chunks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_identical_chunk_dominates() {
        let scorer = RelevanceScorer::new();
        let query = "consumer confidence falls";
        let chunks = owned(&[
            "consumer confidence falls",
            "volcanic rock formations erupt basalt",
        ]);
        let scored = scorer.score(query, &chunks);
        assert!(scored[0].1 >= scored[1].1);
        assert!(scored[0].1 > 0.9);
        assert_eq!(scored[1].1, 0.0);
    }

    #[test]
    fn test_stop_word_corpus_scores_zero() {
        let scorer = RelevanceScorer::new();
        let chunks = owned(&["the and of", ""]);
        let scored = scorer.score("the of", &chunks);
        for (_, score) in scored {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_inflation_chunk_outscores_unrelated_chunk() {
        let scorer = RelevanceScorer::new();
        let chunks = owned(&["economic growth slows", "slows as inflation", "inflation rises"]);
        let scored = scorer.score("inflation", &chunks);

        assert!(scored[1].1 > scored[0].1);
        assert!(scored[2].1 > scored[0].1);
        assert_eq!(scored[0].1, 0.0);
    }
}
