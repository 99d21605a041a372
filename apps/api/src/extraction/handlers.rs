//! Axum route handlers for the Résumé API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::completeness::{compute_writing_score, WritingScoreReport};
use crate::extraction::pipeline::{ParsedResume, ResumeParser};
use crate::models::job::{JobPosting, MatchResult};
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

const NOT_FOUND: &str = "Not found";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    /// Already-decoded résumé text.
    pub text: String,
    #[serde(default = "default_match_jobs")]
    pub match_jobs: bool,
}

fn default_match_jobs() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub profile: CandidateProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchResult>>,
    pub writing_score: WritingScoreReport,
    pub text_preview: String,
    /// First extracted email, or "Not found".
    pub email: String,
    /// First extracted phone number, or "Not found".
    pub mobile: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Runs the parsing pipeline on a blocking worker. A panic inside the pipeline
/// surfaces as a generic internal error; no partial result is returned.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let parser = state.parser.clone();
    let preview_chars = state.config.text_preview_chars;

    let response = tokio::task::spawn_blocking(move || {
        build_response(&parser, &request.text, request.match_jobs, preview_chars)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume parsing task failed: {e}")))?;

    Ok(Json(response))
}

/// GET /api/v1/jobs
///
/// Lists the job catalog the matcher scores against.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.parser.postings().to_vec())
}

fn build_response(
    parser: &ResumeParser,
    raw_text: &str,
    match_jobs: bool,
    preview_chars: usize,
) -> ParseResumeResponse {
    let ParsedResume {
        profile,
        matches,
        text,
    } = parser.parse(raw_text, match_jobs);

    let email = profile
        .contact
        .primary_email()
        .unwrap_or(NOT_FOUND)
        .to_string();
    let mobile = profile
        .contact
        .primary_phone()
        .unwrap_or(NOT_FOUND)
        .to_string();

    ParseResumeResponse {
        writing_score: compute_writing_score(&text),
        text_preview: text.chars().take(preview_chars).collect(),
        email,
        mobile,
        profile,
        matches,
    }
}
