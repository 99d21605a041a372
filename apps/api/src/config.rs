use anyhow::{bail, Context, Result};

use crate::matching::job_matcher::DEFAULT_MATCH_THRESHOLD;

const DEFAULT_TEXT_PREVIEW_CHARS: usize = 1000;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Job postings must score strictly above this (0–100).
    pub match_threshold: f64,
    /// Number of characters of normalized text echoed back in parse responses.
    pub text_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            text_preview_chars: DEFAULT_TEXT_PREVIEW_CHARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let match_threshold = match lookup("MATCH_THRESHOLD") {
            Some(raw) => raw
                .parse::<f64>()
                .context("MATCH_THRESHOLD must be a number")?,
            None => defaults.match_threshold,
        };
        if !(0.0..=100.0).contains(&match_threshold) {
            bail!("MATCH_THRESHOLD must be between 0 and 100, got {match_threshold}");
        }

        Ok(Config {
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            match_threshold,
            text_preview_chars: match lookup("TEXT_PREVIEW_CHARS") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("TEXT_PREVIEW_CHARS must be a non-negative integer")?,
                None => defaults.text_preview_chars,
            },
        })
    }
}
