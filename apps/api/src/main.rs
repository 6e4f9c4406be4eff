mod config;
mod errors;
mod matching;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::engine::AtsEngine;
use crate::matching::vocabulary::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fitscan API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary: replaceable data, fixed before first use
    let vocabulary = match &config.vocab_path {
        Some(path) => SkillVocabulary::from_json_file(path)?,
        None => SkillVocabulary::builtin(),
    };
    info!("Skill vocabulary loaded ({} entries)", vocabulary.len());

    // Build the scoring engine once; it is read-only for the process lifetime
    let engine = Arc::new(AtsEngine::new(vocabulary, config.scoring_policy)?);
    info!("Scoring engine initialized (policy: {:?})", engine.policy());

    let state = AppState {
        engine,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
