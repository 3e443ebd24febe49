//! Corpus construction: one indexable text blob per product.
//!
//! The index never sees a product's fields directly; it sees a combined
//! text built here. Synthetic tokens (the `power <tier>` marker and the
//! fixed domain keywords) are appended so that every product has
//! non-trivial text content even when its source description is empty.
//! Without them a catalog of bare records would degenerate to an
//! all-empty vocabulary.
//!
//! The combined text is a scratch value for fitting only; it is never
//! written back onto the product.

use recsys_core::Product;

/// Fixed domain keywords appended to every combined text.
pub const DOMAIN_KEYWORDS: &str = "pump vacuum";

/// Keyword used by the minimal fallback corpus.
const FALLBACK_KEYWORD: &str = "pump";

/// Below this many total characters across the catalog, the combined
/// texts are considered degenerate and the minimal corpus is used
/// instead. Low enough that a single fully-populated product is never
/// degenerate.
pub const MIN_CORPUS_CHARS: usize = 40;

/// Builds the indexing corpus for a catalog, one string per product in
/// catalog order.
///
/// Falls back to [`minimal_corpus`] when the combined texts are so short
/// that fitting them would be pointless. That guard is a last resort for
/// catalogs of near-empty records, not the common path.
pub fn build_corpus(catalog: &[Product]) -> Vec<String> {
    let combined: Vec<String> = catalog.iter().map(combined_text).collect();

    let total_chars: usize = combined.iter().map(|text| text.len()).sum();
    if !catalog.is_empty() && total_chars < MIN_CORPUS_CHARS {
        tracing::debug!(total_chars, "degenerate corpus, indexing brand and name only");
        return minimal_corpus(catalog);
    }

    combined
}

/// The combined text for one product: brand, name, application, type,
/// subtype, details, a literal power-tier token, and the domain keywords,
/// in that fixed order.
pub fn combined_text(product: &Product) -> String {
    let parts = [
        product.brand.as_str(),
        product.name.as_str(),
        product.application_text.as_str(),
        product.type_text.as_str(),
        product.subtype_text.as_str(),
        product.detail_text.as_str(),
        "power",
        product.power_tier.as_str(),
        DOMAIN_KEYWORDS,
    ];

    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal corpus of brand + name + a fixed keyword per product, used
/// when the full combined texts are degenerate and as the self-healing
/// retry corpus if fitting still produces an empty vocabulary.
pub fn minimal_corpus(catalog: &[Product]) -> Vec<String> {
    catalog
        .iter()
        .map(|product| format!("{} {} {}", product.brand, product.name, FALLBACK_KEYWORD))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recsys_core::PowerTier;

    fn product(brand: &str, name: &str, application: &str, detail: &str) -> Product {
        Product {
            name: name.to_string(),
            brand: brand.to_string(),
            application_text: application.to_string(),
            power_tier: PowerTier::High,
            detail_text: detail.to_string(),
            type_text: String::new(),
            subtype_text: String::new(),
            image_url: String::new(),
            raw_power_rating: Some("6.0".to_string()),
        }
    }

    #[test]
    fn combined_text_field_order() {
        let p = product("Acme", "Vac100", "woodworking", "quiet industrial vacuum");
        assert_eq!(
            combined_text(&p),
            "Acme Vac100 woodworking quiet industrial vacuum power high pump vacuum"
        );
    }

    #[test]
    fn combined_text_includes_type_and_subtype() {
        let mut p = product("Acme", "Vac100", "woodworking", "quiet");
        p.type_text = "side channel".to_string();
        p.subtype_text = "blower".to_string();
        assert_eq!(
            combined_text(&p),
            "Acme Vac100 woodworking side channel blower quiet power high pump vacuum"
        );
    }

    #[test]
    fn empty_fields_still_produce_tokens() {
        let p = product("Unknown Brand", "Unknown Product", "", "");
        let text = combined_text(&p);
        assert!(text.contains("power high"));
        assert!(text.contains(DOMAIN_KEYWORDS));
    }

    #[test]
    fn corpus_in_catalog_order() {
        let catalog = vec![
            product("A", "One", "packaging and sealing lines", "dry running vane pump"),
            product("B", "Two", "woodworking and joinery shops", "quiet side channel blower"),
        ];
        let corpus = build_corpus(&catalog);
        assert_eq!(corpus.len(), 2);
        assert!(corpus[0].starts_with("A One"));
        assert!(corpus[1].starts_with("B Two"));
    }

    #[test]
    fn degenerate_catalog_falls_back_to_minimal() {
        // One near-empty product: combined text is just the synthetic
        // tokens, under the character threshold.
        let catalog = vec![product("A", "X", "", "")];
        let corpus = build_corpus(&catalog);
        assert_eq!(corpus, vec!["A X pump".to_string()]);
    }

    #[test]
    fn single_full_product_is_not_degenerate() {
        let catalog = vec![product("Acme", "Vac100", "woodworking", "quiet industrial vacuum")];
        let corpus = build_corpus(&catalog);
        assert!(corpus[0].contains("quiet industrial vacuum"));
    }

    #[test]
    fn rich_catalog_keeps_full_corpus() {
        let catalog = vec![product(
            "Acme",
            "Vac100",
            "woodworking dust extraction for joinery and panel shops",
            "quiet industrial vacuum with high airflow and low maintenance",
        )];
        let corpus = build_corpus(&catalog);
        assert!(corpus[0].contains("dust extraction"));
        assert!(corpus[0].contains("power high"));
    }

    #[test]
    fn empty_catalog_yields_empty_corpus() {
        assert!(build_corpus(&[]).is_empty());
    }
}
