//! Recommendation engine facade.
//!
//! Ties the pipeline together behind one handle:
//!
//! 1. [`RecommendationEngine::load_products`] normalizes raw records,
//!    builds the corpus, fits the index, and swaps the pair into the
//!    cache; the whole build runs outside any lock
//! 2. [`RecommendationEngine::recommend`] snapshots the cache and runs a
//!    strategy against the consistent pair
//!
//! The engine is cheap to clone; clones share the underlying cache. It
//! holds no per-query state: the same query against an unchanged catalog
//! is fully deterministic.

use recsys_core::{Query, RawRecord, Recommendation};

use crate::cache::{CatalogCache, CatalogState};
use crate::error::EngineError;
use crate::strategy::RecommendStrategy;

/// Snapshot of engine readiness, for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStatus {
    /// True once a catalog has been loaded.
    pub products_loaded: bool,
    /// Number of products in the active catalog.
    pub product_count: usize,
    /// True when a fitted index is cached alongside the catalog.
    pub index_cached: bool,
}

/// Shared handle over the catalog cache and the recommendation pipeline.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    cache: CatalogCache,
}

impl RecommendationEngine {
    /// Creates an engine with an empty catalog cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active catalog with one built from `records`.
    ///
    /// The new state is fully constructed before the swap, so concurrent
    /// queries see either the old pair or the new one, never a mix.
    /// Returns the number of products loaded.
    pub fn load_products(&self, records: &[RawRecord]) -> usize {
        let state = CatalogState::build(records);
        let count = state.catalog.len();
        self.cache.replace(state);
        count
    }

    /// Runs `strategy` for `query` against the active catalog.
    ///
    /// Fails with [`EngineError::NotReady`] when no catalog has ever
    /// been loaded; that condition is recoverable by loading one.
    pub fn recommend(
        &self,
        query: &Query,
        strategy: &dyn RecommendStrategy,
    ) -> Result<Vec<Recommendation>, EngineError> {
        let state = self.cache.snapshot().ok_or(EngineError::NotReady)?;

        tracing::debug!(
            strategy = strategy.name(),
            products = state.catalog.len(),
            "serving recommendation query"
        );
        Ok(strategy.recommend(query, &state.catalog, &state.index))
    }

    /// Current readiness of the engine.
    pub fn status(&self) -> EngineStatus {
        match self.cache.snapshot() {
            Some(state) => EngineStatus {
                products_loaded: true,
                product_count: state.catalog.len(),
                index_cached: state.index.document_count() == state.catalog.len(),
            },
            None => EngineStatus {
                products_loaded: false,
                product_count: 0,
                index_cached: false,
            },
        }
    }

    /// Number of products in the active catalog, 0 when none is loaded.
    pub fn product_count(&self) -> usize {
        self.cache.product_count()
    }

    /// True once a catalog has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cache.is_loaded()
    }
}
