use anyhow::{Context, Result};

use crate::matching::engine::ScoringPolicy;

/// Application configuration loaded from environment variables.
/// Everything has a default; the service starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional path to a JSON skill vocabulary that replaces the built-in
    /// catalog (`SKILL_VOCAB_PATH`).
    pub vocab_path: Option<String>,
    /// Scoring policy selected at startup (`SCORING_POLICY`), constant for
    /// the lifetime of the process.
    pub scoring_policy: ScoringPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scoring_policy = match std::env::var("SCORING_POLICY") {
            Ok(raw) => raw
                .parse::<ScoringPolicy>()
                .map_err(anyhow::Error::msg)
                .context("SCORING_POLICY is not a valid policy name")?,
            Err(_) => ScoringPolicy::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            vocab_path: std::env::var("SKILL_VOCAB_PATH").ok(),
            scoring_policy,
        })
    }
}
