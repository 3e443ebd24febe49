//! Application state shared across handlers.

use std::sync::Arc;

use recsys_engine::RecommendationEngine;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using
/// `State<AppState>`. The engine's catalog cache is the only mutable
/// state; replacement is synchronized inside the engine, so handlers
/// never take locks themselves.
#[derive(Clone)]
pub struct AppState {
    /// Recommendation engine holding the catalog cache.
    engine: RecommendationEngine,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state with an empty catalog cache.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            engine: RecommendationEngine::new(),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the recommendation engine.
    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
