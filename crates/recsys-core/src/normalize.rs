//! Schema normalization for heterogeneous catalog records.
//!
//! Source catalogs arrive with varying column names, casing, and coverage
//! (CSV exports, CRM dumps, inline JSON). This module maps each raw record
//! onto the canonical [`Product`] shape by evaluating an ordered rule
//! table: for every canonical field there is a priority-ordered list of
//! accepted synonym keys and a documented default.
//!
//! Normalization is deliberately lenient. A record missing every
//! recognized key still normalizes: it becomes an "Unknown Product" with
//! empty text fields and a `medium` power tier. Incomplete input is never
//! an error.
//!
//! Rules:
//!
//! - the first non-missing synonym wins; null values count as missing
//! - scalar values of any JSON type are accepted and rendered as text
//! - free-text fields are lower-cased **after** default substitution so
//!   every value flows through the same casing path
//! - input records are never mutated

use serde_json::{Map, Value};

use crate::types::{PowerTier, Product};

/// A raw catalog record: arbitrary string keys mapped to JSON values,
/// preserving source order.
pub type RawRecord = Map<String, Value>;

/// Synonym keys accepted for the product name, in priority order.
const NAME_KEYS: &[&str] = &["Product", "Product_Name"];
/// Synonym keys accepted for the brand.
const BRAND_KEYS: &[&str] = &["Brand"];
/// Synonym keys accepted for the application text.
const APPLICATION_KEYS: &[&str] = &["Application", "Applications"];
/// Synonym keys accepted for the descriptive text.
const DETAIL_KEYS: &[&str] = &["Description", "Product_Details"];
/// Synonym keys accepted for the product type.
const TYPE_KEYS: &[&str] = &["Type"];
/// Synonym keys accepted for the product subtype.
const SUBTYPE_KEYS: &[&str] = &["Subtype"];
/// Synonym keys accepted for the image URL.
const IMAGE_KEYS: &[&str] = &["Image_URL"];
/// Accepted spellings of the motor-rating column, in priority order.
const MOTOR_RATING_KEYS: &[&str] = &["Motor Rating (kw)", "Motor_Rating_kW", "Motor Rating(kW)"];

/// Placeholder for records with no recognizable product name.
pub const DEFAULT_PRODUCT_NAME: &str = "Unknown Product";
/// Placeholder for records with no recognizable brand.
pub const DEFAULT_BRAND: &str = "Unknown Brand";

/// Normalizes a batch of raw records into canonical products.
///
/// Output order matches input order; a product's position in the returned
/// catalog is its identifier for index alignment.
pub fn normalize_records(records: &[RawRecord]) -> Vec<Product> {
    records.iter().map(normalize_record).collect()
}

/// Normalizes a single raw record.
pub fn normalize_record(record: &RawRecord) -> Product {
    let raw_power_rating = lookup(record, MOTOR_RATING_KEYS);
    let power_tier = PowerTier::classify(raw_power_rating.as_deref());

    Product {
        name: lookup(record, NAME_KEYS).unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
        brand: lookup(record, BRAND_KEYS).unwrap_or_else(|| DEFAULT_BRAND.to_string()),
        application_text: lookup(record, APPLICATION_KEYS)
            .unwrap_or_default()
            .to_lowercase(),
        power_tier,
        detail_text: lookup(record, DETAIL_KEYS).unwrap_or_default().to_lowercase(),
        type_text: lookup(record, TYPE_KEYS).unwrap_or_default().to_lowercase(),
        subtype_text: lookup(record, SUBTYPE_KEYS)
            .unwrap_or_default()
            .to_lowercase(),
        image_url: lookup(record, IMAGE_KEYS).unwrap_or_default(),
        raw_power_rating,
    }
}

/// Converts a normalized product back to a raw record under the canonical
/// keys. Re-normalizing the result reproduces the product exactly.
pub fn record_from_product(product: &Product) -> RawRecord {
    let mut record = RawRecord::new();
    record.insert("Product".to_string(), Value::from(product.name.clone()));
    record.insert("Brand".to_string(), Value::from(product.brand.clone()));
    record.insert(
        "Application".to_string(),
        Value::from(product.application_text.clone()),
    );
    record.insert(
        "Description".to_string(),
        Value::from(product.detail_text.clone()),
    );
    record.insert("Type".to_string(), Value::from(product.type_text.clone()));
    record.insert(
        "Subtype".to_string(),
        Value::from(product.subtype_text.clone()),
    );
    if let Some(rating) = &product.raw_power_rating {
        record.insert("Motor Rating (kw)".to_string(), Value::from(rating.clone()));
    }
    record.insert(
        "Image_URL".to_string(),
        Value::from(product.image_url.clone()),
    );
    record
}

/// Returns the value of the first candidate key present with a scalar,
/// non-null value.
fn lookup(record: &RawRecord, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(scalar_text))
}

/// Renders a scalar JSON value as text. Null, arrays, and objects count
/// as missing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
