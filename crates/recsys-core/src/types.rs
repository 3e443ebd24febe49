//! Core data types for the recommendation pipeline.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON interchange.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Power classification
// ============================================================================

/// Motor ratings at or above this many kW classify as [`PowerTier::High`].
pub const HIGH_POWER_KW: f64 = 5.5;

/// Motor ratings at or above this many kW (and below [`HIGH_POWER_KW`])
/// classify as [`PowerTier::Medium`].
pub const MEDIUM_POWER_KW: f64 = 2.0;

/// Derived three-valued power classification of a product's motor rating.
///
/// Tiers are derived from the raw rating field, never user-supplied. The
/// kW thresholds are fixed constants of the domain; changing them breaks
/// compatibility with catalogs classified by earlier versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerTier {
    Low,
    Medium,
    High,
}

impl PowerTier {
    /// Classifies a raw motor-rating value into a power tier.
    ///
    /// The raw value is taken as text; compound ratings like `"5.5/7.5"`
    /// use only the part before the first `/`. Anything that fails to
    /// parse as a number (missing, empty, non-numeric) classifies as
    /// `Medium`, the neutral default. Leniency here is deliberate: a
    /// malformed rating must never fail catalog loading.
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Medium;
        };

        let first = raw.split('/').next().unwrap_or("").trim();
        match first.parse::<f64>() {
            Ok(kw) if kw >= HIGH_POWER_KW => Self::High,
            Ok(kw) if kw >= MEDIUM_POWER_KW => Self::Medium,
            Ok(_) => Self::Low,
            Err(_) => Self::Medium,
        }
    }

    /// Returns the lower-case tier name used for matching and indexing.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PowerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Catalog entries
// ============================================================================

/// One normalized catalog entry.
///
/// Every field is populated: normalization substitutes documented defaults
/// for anything the source record left out. The free-text fields
/// (`application_text`, `detail_text`, `type_text`, `subtype_text`) are
/// lower-case; `name` and `brand` keep their source casing for display.
///
/// A product's position in its catalog is its identifier: similarity
/// scores from the fitted index are aligned back to products by position,
/// so catalog order must stay stable for the lifetime of an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name ("Unknown Product" when the source had none).
    pub name: String,
    /// Brand name ("Unknown Brand" when the source had none).
    pub brand: String,
    /// Lower-cased free text of applicable use-cases.
    pub application_text: String,
    /// Derived power tier.
    pub power_tier: PowerTier,
    /// Lower-cased descriptive/marketing text.
    pub detail_text: String,
    /// Lower-cased product type, when the source carried one.
    pub type_text: String,
    /// Lower-cased product subtype, when the source carried one.
    pub subtype_text: String,
    /// Product image URL, empty when absent.
    pub image_url: String,
    /// Source motor-rating text the tier was derived from, kept so a
    /// normalized product can round-trip through normalization unchanged.
    pub raw_power_rating: Option<String>,
}

// ============================================================================
// Queries and results
// ============================================================================

/// One stateless recommendation request.
///
/// Queries never mutate the catalog; the same query against an unchanged
/// catalog yields byte-identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Application facet, matched by substring containment.
    pub application: String,
    /// Power tier facet, matched by exact equality against the tier name.
    pub power: String,
    /// Free-text description, matched by index similarity.
    pub description: String,
    /// Maximum number of results to return.
    pub count: usize,
}

impl Query {
    /// Creates a query for the given facets and description.
    pub fn new(
        application: impl Into<String>,
        power: impl Into<String>,
        description: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            application: application.into(),
            power: power.into(),
            description: description.into(),
            count,
        }
    }
}

/// One ranked recommendation in the external wire shape.
///
/// Field names follow the JSON contract consumed by existing clients.
/// `application` and `power_usage` are rendered in title case;
/// `score_percent` is the ranking score scaled to a percentage and rounded
/// to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Product_Name")]
    pub product_name: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Application")]
    pub application: String,
    #[serde(rename = "PowerUsage")]
    pub power_usage: String,
    #[serde(rename = "Similarity_Score")]
    pub score_percent: f64,
    #[serde(rename = "Image_URL", default)]
    pub image_url: String,
}

impl Recommendation {
    /// Builds a recommendation for `product` with the given raw score.
    ///
    /// `score` is the strategy's ranking score in [0, 1]; it is scaled to
    /// a percentage and rounded to two decimals for display.
    pub fn from_scored(product: &Product, score: f64) -> Self {
        Self {
            product_name: product.name.clone(),
            brand: product.brand.clone(),
            application: title_case(&product.application_text),
            power_usage: title_case(product.power_tier.as_str()),
            score_percent: round2(score * 100.0),
            image_url: product.image_url.clone(),
        }
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Title-cases each whitespace-separated word ("food packaging" ->
/// "Food Packaging").
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_high_boundary() {
        assert_eq!(PowerTier::classify(Some("5.5")), PowerTier::High);
        assert_eq!(PowerTier::classify(Some("5.49")), PowerTier::Medium);
    }

    #[test]
    fn classify_medium_boundary() {
        assert_eq!(PowerTier::classify(Some("2.0")), PowerTier::Medium);
        assert_eq!(PowerTier::classify(Some("1.99")), PowerTier::Low);
    }

    #[test]
    fn classify_compound_rating_uses_first_part() {
        assert_eq!(PowerTier::classify(Some("7.5/10")), PowerTier::High);
        assert_eq!(PowerTier::classify(Some("1.1/3.0")), PowerTier::Low);
    }

    #[test]
    fn classify_whitespace_trimmed() {
        assert_eq!(PowerTier::classify(Some("  6.0  ")), PowerTier::High);
        assert_eq!(PowerTier::classify(Some(" 5.5 / 7.5")), PowerTier::High);
    }

    #[test]
    fn classify_unparseable_defaults_to_medium() {
        assert_eq!(PowerTier::classify(Some("abc")), PowerTier::Medium);
        assert_eq!(PowerTier::classify(Some("")), PowerTier::Medium);
        assert_eq!(PowerTier::classify(None), PowerTier::Medium);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PowerTier::High).unwrap(), "\"high\"");
        let parsed: PowerTier = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, PowerTier::Low);
    }

    #[test]
    fn title_case_basic() {
        assert_eq!(title_case("woodworking"), "Woodworking");
        assert_eq!(title_case("food packaging"), "Food Packaging");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn round2_behavior() {
        assert_eq!(round2(80.125), 80.13);
        assert_eq!(round2(80.0), 80.0);
    }

    #[test]
    fn recommendation_wire_names() {
        let product = Product {
            name: "Vac100".to_string(),
            brand: "Acme".to_string(),
            application_text: "woodworking".to_string(),
            power_tier: PowerTier::High,
            detail_text: "quiet industrial vacuum".to_string(),
            type_text: String::new(),
            subtype_text: String::new(),
            image_url: String::new(),
            raw_power_rating: Some("6.0".to_string()),
        };

        let rec = Recommendation::from_scored(&product, 0.8123);
        let json = serde_json::to_string(&rec).unwrap();

        assert!(json.contains("\"Product_Name\":\"Vac100\""));
        assert!(json.contains("\"Brand\":\"Acme\""));
        assert!(json.contains("\"Application\":\"Woodworking\""));
        assert!(json.contains("\"PowerUsage\":\"High\""));
        assert!(json.contains("\"Similarity_Score\":81.23"));
        assert!(json.contains("\"Image_URL\":\"\""));
    }
}
