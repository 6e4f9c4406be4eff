use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::AtsEngine;

/// Shared application state injected into all route handlers via Axum
/// extractors. The engine is built once at startup and read-only afterwards,
/// so handlers share it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AtsEngine>,
    /// Startup configuration, kept alongside the engine for handlers that
    /// need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
