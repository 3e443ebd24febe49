//! Recommendation serving route.
//!
//! `POST /recommendations` answers a query from the cached catalog using
//! the filtered-similarity strategy: hard filter on the application
//! facet, narrow by power tier, rank survivors by description
//! similarity. A request may inline a product list; it replaces the
//! cache only when its length differs from the cached catalog, which
//! keeps repeated requests from clients that always attach their catalog
//! from re-fitting on every call.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use recsys_core::{Query, RawRecord, Recommendation};
use recsys_engine::FilteredSimilarityStrategy;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Default number of recommendations when the request omits `count`.
const DEFAULT_COUNT: usize = 10;

fn default_count() -> usize {
    DEFAULT_COUNT
}

/// Request body for POST /recommendations.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Application facet, matched by substring.
    pub application: String,
    /// Power tier facet ("low", "medium", or "high", any casing).
    pub power: String,
    /// Free-text description.
    pub description: String,
    /// Maximum number of results.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Optional inline catalog; replaces the cache when its length
    /// differs from the cached catalog's.
    #[serde(default)]
    pub products: Vec<RawRecord>,
}

/// Response for POST /recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Always true on success.
    pub success: bool,
    /// Number of results returned.
    pub count: usize,
    /// Ranked results, best first.
    pub data: Vec<Recommendation>,
}

/// POST /recommendations - Serve a query against the cached catalog.
///
/// # Request
///
/// Body: `{ "application": "...", "power": "...", "description": "...",
/// "count": 10, "products": [...] }` (`count` and `products` optional).
///
/// # Response
///
/// - 200 OK: `{ "success": true, "count": N, "data": [...] }`; `count`
///   is 0 with empty `data` when nothing matches the application facet
/// - 503 Service Unavailable: no catalog has been loaded yet
async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let engine = state.engine();

    // Refresh the cache from the inline catalog when its size differs
    // from what is cached.
    if !request.products.is_empty() && engine.product_count() != request.products.len() {
        tracing::info!(
            products = request.products.len(),
            "refreshing catalog from request payload"
        );
        engine.load_products(&request.products);
    }

    if !engine.is_loaded() {
        return Err(ApiError::NotReady(
            "load products before requesting recommendations".to_string(),
        ));
    }

    let query = Query::new(
        request.application,
        request.power,
        request.description,
        request.count,
    );
    let data = engine.recommend(&query, &FilteredSimilarityStrategy::new())?;

    Ok(Json(RecommendationsResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// Build recommendation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/recommendations", post(recommend))
}
