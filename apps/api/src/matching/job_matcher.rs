//! Job Matching — pluggable, trait-based matcher that scores a candidate's
//! skills against every job posting in the catalog.
//!
//! Default: `TfidfJobMatcher` (pure-Rust, deterministic, fully testable).
//! The parser holds an `Arc<dyn JobMatcher>`, so a semantic backend can be
//! swapped in at startup without touching the pipeline or the handlers.

use tracing::debug;

use crate::matching::tfidf::fit_transform;
use crate::models::job::{JobPosting, MatchResult};

/// Postings must score strictly above this percentage to be kept.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching callers.
pub trait JobMatcher: Send + Sync {
    /// Returns the postings that match `skills`, in posting order. Must not
    /// fail for any input, including an empty skill list.
    fn match_jobs(&self, skills: &[String], postings: &[JobPosting]) -> Vec<MatchResult>;
}

// ────────────────────────────────────────────────────────────────────────────
// TfidfJobMatcher — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Pairwise TF-IDF matcher.
///
/// Algorithm, per posting:
/// 1. Fit TF-IDF over exactly two documents: the joined skills and the description.
/// 2. Cosine similarity of the two vectors, scaled to 0–100, rounded to 2 decimals.
/// 3. Keep the posting when the score is strictly above the threshold.
#[derive(Debug, Clone)]
pub struct TfidfJobMatcher {
    threshold: f64,
}

impl TfidfJobMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for TfidfJobMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl JobMatcher for TfidfJobMatcher {
    fn match_jobs(&self, skills: &[String], postings: &[JobPosting]) -> Vec<MatchResult> {
        let skill_text = skills.join(" ");
        if skill_text.trim().is_empty() {
            debug!("No skills to match; skipping job matching");
            return Vec::new();
        }

        postings
            .iter()
            .filter_map(|posting| {
                let score = similarity_score(&skill_text, &posting.description);
                debug!(title = %posting.title, score, "Scored job posting");
                (score > self.threshold).then(|| MatchResult {
                    title: posting.title.clone(),
                    score,
                    link: posting.link.clone(),
                })
            })
            .collect()
    }
}

/// Similarity of two documents as a 0–100 percentage with two decimals.
pub fn similarity_score(left: &str, right: &str) -> f64 {
    let vectors = fit_transform(&[left, right]);
    let cosine = match vectors.as_slice() {
        [a, b] => a.cosine(b),
        _ => 0.0,
    };
    round2(cosine * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
