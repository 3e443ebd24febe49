//! Catalog loading route.
//!
//! `POST /load-products` replaces the whole catalog/index pair. The new
//! pair is built before the swap, so in-flight queries keep serving the
//! previous catalog until the replacement is complete.

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;

use recsys_core::RawRecord;

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for POST /load-products.
#[derive(Debug, Serialize)]
pub struct LoadProductsResponse {
    /// Always true on success.
    pub success: bool,
    /// Confirmation message with the loaded product count.
    pub message: String,
}

/// POST /load-products - Replace the cached catalog.
///
/// # Request
///
/// Body: a JSON array of raw product records with arbitrary keys.
///
/// # Response
///
/// - 200 OK: `{ "success": true, "message": "Loaded and cached N products" }`
/// - 400 Bad Request: body is not a JSON array of objects
async fn load_products(
    State(state): State<AppState>,
    Json(records): Json<Vec<RawRecord>>,
) -> ApiResult<Json<LoadProductsResponse>> {
    let count = state.engine().load_products(&records);

    tracing::info!(products = count, "catalog replaced");

    Ok(Json(LoadProductsResponse {
        success: true,
        message: format!("Loaded and cached {count} products"),
    }))
}

/// Build catalog loading routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/load-products", post(load_products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use serde_json::Value;

    fn record(fields: &[(&str, &str)]) -> RawRecord {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }

    #[tokio::test]
    async fn test_load_products_caches_catalog() {
        let state = AppState::new(ServerConfig::default());

        let response = load_products(
            State(state.clone()),
            Json(vec![
                record(&[("Product", "Vac100"), ("Brand", "Acme")]),
                record(&[("Product", "Pak20"), ("Brand", "Bolt")]),
            ]),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Loaded and cached 2 products");
        assert_eq!(state.engine().product_count(), 2);
    }

    #[tokio::test]
    async fn test_load_empty_list_clears_to_empty_catalog() {
        let state = AppState::new(ServerConfig::default());
        state
            .engine()
            .load_products(&[record(&[("Product", "Vac100")])]);

        let response = load_products(State(state.clone()), Json(vec![]))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(state.engine().product_count(), 0);
        // An empty catalog is still a loaded catalog.
        assert!(state.engine().is_loaded());
    }
}
