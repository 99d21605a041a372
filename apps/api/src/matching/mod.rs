// Job matching: TF-IDF vectorization and similarity-based posting selection.

pub mod job_matcher;
pub mod tfidf;
