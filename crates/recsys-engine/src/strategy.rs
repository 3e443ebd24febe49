//! The two recommendation strategies.
//!
//! Both consume the same normalized catalog and fitted index but serve
//! different contracts:
//!
//! - [`HybridDiversityStrategy`] (batch surface): scores every product,
//!   ranks, and fills the quota with brand diversity. It always returns
//!   up to `top_n` results, falling back to lower-scored products.
//! - [`FilteredSimilarityStrategy`] (online surface): hard-filters by the
//!   categorical facets first and ranks the survivors purely by text
//!   similarity. It can return an empty result set when nothing matches
//!   the application facet.
//!
//! The two are deliberately kept as separate named implementations of one
//! trait; their observable behavior differs and callers pick by name.

use recsys_core::{Product, Query, Recommendation};

use crate::error::EngineError;
use crate::rank::{rank_candidates, select_diverse};
use crate::score::{ScoreWeights, score_catalog};
use crate::tfidf::TfidfIndex;

/// A recommendation strategy over a catalog and its fitted index.
pub trait RecommendStrategy {
    /// Stable name of the strategy, for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Produces ranked recommendations for the query. Never mutates the
    /// catalog or index.
    fn recommend(
        &self,
        query: &Query,
        catalog: &[Product],
        index: &TfidfIndex,
    ) -> Vec<Recommendation>;
}

/// Hybrid scoring with brand-diverse selection.
#[derive(Debug, Clone, Default)]
pub struct HybridDiversityStrategy {
    weights: ScoreWeights,
}

impl HybridDiversityStrategy {
    /// Creates the strategy with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the strategy with custom weights, validated to sum to 1.0.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, EngineError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// The weights in effect.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

impl RecommendStrategy for HybridDiversityStrategy {
    fn name(&self) -> &'static str {
        "hybrid-diversity"
    }

    fn recommend(
        &self,
        query: &Query,
        catalog: &[Product],
        index: &TfidfIndex,
    ) -> Vec<Recommendation> {
        let scored = score_catalog(query, catalog, index, &self.weights);
        let ranked = rank_candidates(scored);
        select_diverse(&ranked, catalog, query.count)
    }
}

/// Hard categorical filtering followed by pure similarity ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilteredSimilarityStrategy;

impl FilteredSimilarityStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl RecommendStrategy for FilteredSimilarityStrategy {
    fn name(&self) -> &'static str {
        "filtered-similarity"
    }

    fn recommend(
        &self,
        query: &Query,
        catalog: &[Product],
        index: &TfidfIndex,
    ) -> Vec<Recommendation> {
        let user_app = query.application.to_lowercase();
        let user_power = query.power.to_lowercase();

        // Hard filter on the application facet. No matches means an
        // empty result, not an error.
        let app_matches: Vec<usize> = catalog
            .iter()
            .enumerate()
            .filter(|(_, p)| p.application_text.contains(&user_app))
            .map(|(position, _)| position)
            .collect();
        if app_matches.is_empty() {
            return Vec::new();
        }

        // Narrow by power tier, keeping the application matches when the
        // power filter eliminates everything.
        let power_matches: Vec<usize> = app_matches
            .iter()
            .copied()
            .filter(|&position| catalog[position].power_tier.as_str() == user_power)
            .collect();
        let filtered = if power_matches.is_empty() {
            app_matches
        } else {
            power_matches
        };

        // Rank survivors by similarity, carrying original positions so
        // scores never have to be looked up backwards.
        let similarities =
            index.query_similarity(&format!("{} {}", query.description, query.application));
        let mut ranked: Vec<(usize, f64)> = filtered
            .into_iter()
            .map(|position| {
                (
                    position,
                    similarities.get(position).copied().unwrap_or(0.0),
                )
            })
            .collect();
        // Stable sort: equal similarities keep ascending-position order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        ranked
            .into_iter()
            .take(query.count)
            .map(|(position, score)| Recommendation::from_scored(&catalog[position], score))
            .collect()
    }
}
