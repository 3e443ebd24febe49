//! Hybrid scoring: categorical match signals blended with text
//! similarity.
//!
//! Each product gets one bounded score per query:
//!
//! - application facet: substring containment of the lower-cased query
//!   application in the product's application text (a query "pack"
//!   matches "packaging")
//! - power facet: exact equality with the product's derived tier
//! - description: cosine similarity from the fitted index
//!
//! With weights summing to 1.0 the hybrid score stays in [0, 1], and any
//! product matching both categorical facets outranks every product that
//! relies on text similarity alone. Similarity then breaks ties among
//! equally-matched products.

use recsys_core::{Product, Query};

use crate::error::EngineError;
use crate::tfidf::TfidfIndex;

/// Default weight of the application facet match.
pub const WEIGHT_APP: f64 = 0.40;
/// Default weight of the power tier match.
pub const WEIGHT_POWER: f64 = 0.40;
/// Default weight of the description similarity.
pub const WEIGHT_DESC: f64 = 0.20;

/// Tolerance for the weights-sum-to-one invariant.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Weights of the three hybrid-score components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the application substring match.
    pub app: f64,
    /// Weight of the exact power tier match.
    pub power: f64,
    /// Weight of the description similarity.
    pub desc: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            app: WEIGHT_APP,
            power: WEIGHT_POWER,
            desc: WEIGHT_DESC,
        }
    }
}

impl ScoreWeights {
    /// Creates validated weights.
    pub fn new(app: f64, power: f64, desc: f64) -> Result<Self, EngineError> {
        let weights = Self { app, power, desc };
        weights.validate()?;
        Ok(weights)
    }

    /// Checks the weights sum to 1.0, keeping hybrid scores in [0, 1].
    pub fn validate(&self) -> Result<(), EngineError> {
        let sum = self.app + self.power + self.desc;
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::InvalidWeights { sum });
        }
        Ok(())
    }
}

/// One product's score breakdown for a query, aligned to the catalog by
/// position. Ephemeral: produced and discarded per query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Position of the product in the catalog.
    pub position: usize,
    /// Weighted categorical contribution (application + power).
    pub categorical_score: f64,
    /// Weighted description-similarity contribution.
    pub similarity_score: f64,
    /// Sum of the above, bounded in [0, 1].
    pub hybrid_score: f64,
}

/// Scores every product in the catalog for the query, in catalog order.
pub fn score_catalog(
    query: &Query,
    catalog: &[Product],
    index: &TfidfIndex,
    weights: &ScoreWeights,
) -> Vec<ScoredCandidate> {
    let user_app = query.application.to_lowercase();
    let user_power = query.power.to_lowercase();
    let similarities = index.query_similarity(&query.description);

    catalog
        .iter()
        .enumerate()
        .map(|(position, product)| {
            let app_score = if product.application_text.contains(&user_app) {
                weights.app
            } else {
                0.0
            };
            let power_score = if product.power_tier.as_str() == user_power {
                weights.power
            } else {
                0.0
            };
            let similarity_score =
                similarities.get(position).copied().unwrap_or(0.0) * weights.desc;

            ScoredCandidate {
                position,
                categorical_score: app_score + power_score,
                similarity_score,
                hybrid_score: app_score + power_score + similarity_score,
            }
        })
        .collect()
}
