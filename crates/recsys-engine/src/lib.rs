//! recsys-engine: the hybrid product recommendation pipeline.
//!
//! Given a catalog of normalized products ([`recsys_core`]), this crate
//! builds a term-weighted text index over it and answers stateless
//! queries by blending exact categorical matches with text similarity:
//!
//! - [`corpus`]: one indexable text blob per product
//! - [`tfidf`]: TF-IDF fitting and cosine-similarity queries
//! - [`score`]: categorical + similarity blending into one bounded score
//! - [`rank`]: deterministic ordering and brand-diverse selection
//! - [`strategy`]: the two named recommendation strategies
//! - [`cache`]: the single-slot catalog/index cache
//! - [`engine`]: the facade surfaces consume
//!
//! The catalog and its index live only in process memory and are rebuilt
//! from scratch whenever the catalog is replaced.

pub mod cache;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod rank;
pub mod score;
pub mod strategy;
pub mod tfidf;

// Re-exports for convenience
pub use cache::{CatalogCache, CatalogState};
pub use engine::{EngineStatus, RecommendationEngine};
pub use error::EngineError;
pub use score::{ScoreWeights, ScoredCandidate};
pub use strategy::{FilteredSimilarityStrategy, HybridDiversityStrategy, RecommendStrategy};
pub use tfidf::TfidfIndex;
