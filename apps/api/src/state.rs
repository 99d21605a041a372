use std::sync::Arc;

use crate::config::Config;
use crate::extraction::pipeline::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Parser with the read-only skill vocabulary and job catalog loaded at startup.
    pub parser: Arc<ResumeParser>,
    pub config: Config,
}
