mod catalog;
mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod nlp;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{builtin_job_postings, SkillVocabulary};
use crate::config::Config;
use crate::extraction::pipeline::ResumeParser;
use crate::matching::job_matcher::TfidfJobMatcher;
use crate::nlp::entities::RegexEntityRecognizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Static catalog: loaded once, read-only for the life of the process
    let vocabulary = Arc::new(SkillVocabulary::builtin());
    let postings = Arc::new(builtin_job_postings());
    info!(
        "Catalog loaded: {} skills, {} job postings",
        vocabulary.len(),
        postings.len()
    );

    let recognizer = Arc::new(RegexEntityRecognizer);
    let matcher = Arc::new(TfidfJobMatcher::new(config.match_threshold));
    info!(
        "Parser ready (entities: regex, match threshold: {})",
        config.match_threshold
    );

    let state = AppState {
        parser: Arc::new(ResumeParser::new(vocabulary, postings, recognizer, matcher)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
