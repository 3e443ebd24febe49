//! Ranking and brand-diverse selection of scored candidates.
//!
//! Candidates are ordered by hybrid score descending with ties broken by
//! original catalog position (stable sort), so a query against an
//! unchanged catalog always ranks identically. Selection then walks the
//! ranked list greedily, preferring unseen brands: a brand repeat is
//! accepted only while the result quota is still unfilled. The walk is
//! bounded to `2 * top_n` scanned candidates so it terminates early on
//! catalogs with few brands.

use std::collections::HashSet;

use recsys_core::{Product, Recommendation};

use crate::score::ScoredCandidate;

/// Sorts candidates by hybrid score descending, ties by catalog
/// position.
pub fn rank_candidates(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    // Stable sort: equal scores keep ascending-position order.
    scored.sort_by(|a, b| {
        b.hybrid_score
            .partial_cmp(&a.hybrid_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

/// Selects up to `top_n` results from ranked candidates, spreading
/// results across distinct brands before repeating a brand.
///
/// Diversity is a soft preference: while fewer than `top_n` results are
/// accepted, any candidate is taken; past that point only unseen brands
/// are, until `top_n` results covering `top_n` distinct brands exist or
/// `2 * top_n` candidates have been scanned. The returned list preserves
/// rank order and never exceeds `top_n` entries.
pub fn select_diverse(
    ranked: &[ScoredCandidate],
    catalog: &[Product],
    top_n: usize,
) -> Vec<Recommendation> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut seen_brands: HashSet<&str> = HashSet::new();

    for candidate in ranked.iter().take(top_n.saturating_mul(2)) {
        let product = &catalog[candidate.position];

        if !seen_brands.contains(product.brand.as_str()) || results.len() < top_n {
            results.push(Recommendation::from_scored(product, candidate.hybrid_score));
            seen_brands.insert(product.brand.as_str());

            if results.len() >= top_n && seen_brands.len() >= top_n {
                break;
            }
        }
    }

    results.truncate(top_n);
    results
}
