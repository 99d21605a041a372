//! TF-IDF vectors over a small in-memory corpus.
//!
//! Terms are lowercased runs of two or more word characters with English stop
//! words removed. Weights are raw term counts times the smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalized.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern should compile"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "either", "etc", "few", "for", "from", "further", "had", "has", "have", "having",
        "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "if",
        "in", "into", "is", "it", "its", "itself", "just", "may", "me", "might", "more", "most",
        "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
        "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
        "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "upon", "us", "very", "via", "was", "we", "were", "what", "when", "where",
        "which", "while", "who", "whom", "why", "will", "with", "within", "would", "yet", "you",
        "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// A sparse, L2-normalized document vector keyed by term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Cosine similarity of two normalized vectors. Zero vectors score 0.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .weights
            .iter()
            .map(|(term, w)| w * large.weight(term))
            .sum();
        dot.clamp(0.0, 1.0)
    }
}

/// Extracts the analyzed terms of a document.
pub fn terms(doc: &str) -> Vec<String> {
    TERM.find_iter(doc)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| !STOP_WORDS.contains(t.as_str()))
        .collect()
}

/// Fits idf over `docs` and returns one normalized vector per document.
pub fn fit_transform(docs: &[&str]) -> Vec<TermVector> {
    let counts: Vec<HashMap<String, usize>> = docs
        .iter()
        .map(|doc| {
            let mut tf = HashMap::new();
            for term in terms(doc) {
                *tf.entry(term).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tf in &counts {
        for term in tf.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = docs.len() as f64;
    let idf = |term: &str| {
        let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    };

    counts
        .iter()
        .map(|tf| {
            let mut weights: HashMap<String, f64> = tf
                .iter()
                .map(|(term, count)| (term.clone(), *count as f64 * idf(term.as_str())))
                .collect();

            let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                weights.values_mut().for_each(|w| *w /= norm);
            } else {
                weights.clear();
            }
            TermVector { weights }
        })
        .collect()
}
