//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// True once a catalog has been loaded.
    pub products_loaded: bool,
    /// Number of products in the active catalog.
    pub product_count: usize,
    /// True when a fitted index is cached alongside the catalog.
    pub index_cached: bool,
}

/// GET /health - Health check with cache readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.engine().status();

    Json(HealthResponse {
        status: "ok".to_string(),
        products_loaded: status.products_loaded,
        product_count: status.product_count,
        index_cached: status.index_cached,
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_health_before_load() {
        let state = AppState::new(ServerConfig::default());
        let response = health_check(State(state)).await;

        assert_eq!(response.status, "ok");
        assert!(!response.products_loaded);
        assert_eq!(response.product_count, 0);
        assert!(!response.index_cached);
    }

    #[tokio::test]
    async fn test_health_after_load() {
        let state = AppState::new(ServerConfig::default());
        let record: recsys_core::RawRecord =
            [("Product".to_string(), serde_json::Value::from("Vac100"))]
                .into_iter()
                .collect();
        state.engine().load_products(&[record]);

        let response = health_check(State(state)).await;
        assert!(response.products_loaded);
        assert_eq!(response.product_count, 1);
        assert!(response.index_cached);
    }
}
