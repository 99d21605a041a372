use serde::{Deserialize, Serialize};

/// A job description from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// A posting whose similarity to the candidate's skills cleared the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub title: String,
    /// Cosine similarity scaled to 0–100, rounded to two decimals.
    pub score: f64,
    pub link: String,
}
