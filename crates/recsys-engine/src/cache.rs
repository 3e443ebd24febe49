//! Single-slot catalog cache with whole-catalog invalidation.
//!
//! The process serves queries from exactly one (normalized catalog,
//! fitted index) pair. Replacing the catalog replaces the pair
//! wholesale; there is no incremental update and nothing is persisted.
//!
//! ## Consistency
//!
//! The pair is built outside the lock and swapped in as one `Arc` under a
//! write lock. Readers take a snapshot of that `Arc`, so a query in
//! flight always sees a catalog and index that were fitted together,
//! even while a replacement is happening concurrently. Clones of the
//! cache share the same slot.

use std::sync::{Arc, RwLock};

use recsys_core::{Product, RawRecord, normalize_records};

use crate::corpus::{build_corpus, minimal_corpus};
use crate::tfidf::TfidfIndex;

/// An immutable catalog/index pair, always fitted together.
#[derive(Debug)]
pub struct CatalogState {
    /// The normalized catalog, in load order.
    pub catalog: Vec<Product>,
    /// The index fitted over exactly this catalog.
    pub index: TfidfIndex,
}

impl CatalogState {
    /// Normalizes raw records and fits their index.
    ///
    /// If the fitted vocabulary comes out empty (a catalog of blank
    /// records), fitting retries once against the minimal brand+name
    /// corpus. An empty vocabulary after the retry is served as-is and
    /// yields all-zero similarities; building never fails.
    pub fn build(records: &[RawRecord]) -> Self {
        let catalog = normalize_records(records);

        tracing::info!(products = catalog.len(), "computing term-weighted index");
        let mut index = TfidfIndex::fit(&build_corpus(&catalog));

        if index.vocabulary_len() == 0 && !catalog.is_empty() {
            tracing::debug!("empty vocabulary after fit, retrying with minimal corpus");
            index = TfidfIndex::fit(&minimal_corpus(&catalog));
        }

        tracing::info!(
            products = catalog.len(),
            vocabulary = index.vocabulary_len(),
            "catalog state built"
        );

        Self { catalog, index }
    }
}

/// Thread-safe single-slot cache for the active [`CatalogState`].
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    slot: Arc<RwLock<Option<Arc<CatalogState>>>>,
}

impl CatalogCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a consistent snapshot of the current state, if any.
    ///
    /// The snapshot stays valid for the whole query even if the slot is
    /// replaced concurrently.
    pub fn snapshot(&self) -> Option<Arc<CatalogState>> {
        self.slot.read().ok()?.clone()
    }

    /// Swaps in a new state, invalidating the previous one.
    pub fn replace(&self, state: CatalogState) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(Arc::new(state));
        }
    }

    /// Empties the slot.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    /// Returns true if a catalog is loaded.
    pub fn is_loaded(&self) -> bool {
        self.slot.read().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Number of products in the cached catalog, 0 when empty.
    pub fn product_count(&self) -> usize {
        self.snapshot().map(|state| state.catalog.len()).unwrap_or(0)
    }
}
