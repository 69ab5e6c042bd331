//! Scan records

use chrono::{DateTime, Utc};
use qrlens_scanner::{classify, PayloadKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base URL of the `OpenFoodFacts` product pages
pub const PRODUCT_PAGE_BASE: &str = "https://world.openfoodfacts.org/product";

/// A single scan in history or favorites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Raw decoded text
    pub data: String,
    /// When the code was captured
    pub timestamp: DateTime<Utc>,
    /// Classified payload kind
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    /// Derived from the favorites table when read
    #[serde(default)]
    pub is_favorite: bool,
    /// Product data for barcodes, when a lookup succeeded
    #[serde(default, rename = "foodProduct", skip_serializing_if = "Option::is_none")]
    pub product: Option<FoodProduct>,
}

impl ScanRecord {
    /// Create a record for freshly decoded text
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        let data = data.into();
        Self {
            id: Uuid::new_v4(),
            kind: classify(&data),
            data,
            timestamp: Utc::now(),
            is_favorite: false,
            product: None,
        }
    }

    /// Set the capture time
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Where "open" should go for this scan
    ///
    /// Barcodes open their product page; URLs open themselves.
    #[must_use]
    pub fn open_target(&self) -> Option<String> {
        match self.kind {
            PayloadKind::Barcode => Some(format!("{PRODUCT_PAGE_BASE}/{}", self.data)),
            PayloadKind::Url => Some(self.data.clone()),
            _ => None,
        }
    }

    /// Display name for the product, if enriched
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.product_name.as_deref())
    }
}

/// Product data as returned by `OpenFoodFacts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodProduct {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutriscore_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecoscore_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutriments: Option<Nutriments>,
}

/// Nutrition facts per 100 g
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_100g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,
}

impl FoodProduct {
    /// Nutri-Score grade normalized to a single lowercase letter `a`-`e`
    #[must_use]
    pub fn nutriscore(&self) -> Option<char> {
        grade_letter(self.nutriscore_grade.as_deref())
    }

    /// Eco-Score grade normalized to a single lowercase letter `a`-`e`
    #[must_use]
    pub fn ecoscore(&self) -> Option<char> {
        grade_letter(self.ecoscore_grade.as_deref())
    }
}

fn grade_letter(grade: Option<&str>) -> Option<char> {
    let grade = grade?.trim().to_lowercase();
    let mut chars = grade.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'a'..='e'), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_classified() {
        let record = ScanRecord::new("4006381333931");
        assert_eq!(record.kind, PayloadKind::Barcode);
        assert!(!record.is_favorite);
        assert!(record.product.is_none());
    }

    #[test]
    fn test_open_target() {
        assert_eq!(
            ScanRecord::new("4006381333931").open_target().as_deref(),
            Some("https://world.openfoodfacts.org/product/4006381333931")
        );
        assert_eq!(
            ScanRecord::new("https://example.com").open_target().as_deref(),
            Some("https://example.com")
        );
        assert_eq!(ScanRecord::new("hello").open_target(), None);
    }

    #[test]
    fn test_grade_letter() {
        assert_eq!(grade_letter(Some("B")), Some('b'));
        assert_eq!(grade_letter(Some("unknown")), None);
        assert_eq!(grade_letter(Some("f")), None);
        assert_eq!(grade_letter(None), None);
    }

    #[test]
    fn test_record_json_shape() {
        let record = ScanRecord::new("hello");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["isFavorite"], false);
        assert!(json.get("foodProduct").is_none());
    }
}
