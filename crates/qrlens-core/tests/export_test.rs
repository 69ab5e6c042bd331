//! Export formatter tests

use qrlens_core::export::{to_json, to_markdown};
use qrlens_core::{FoodProduct, ScanRecord};

#[test]
fn test_markdown_empty() {
    let md = to_markdown(&[]);
    assert!(md.contains("# qrlens Scan History"));
    assert!(md.contains("_No scans recorded_"));
}

#[test]
fn test_markdown_rows() {
    let mut favorite = ScanRecord::new("https://example.com");
    favorite.is_favorite = true;
    let mut product = ScanRecord::new("3017620422003");
    product.product = Some(FoodProduct {
        code: "3017620422003".to_string(),
        product_name: Some("Nutella".to_string()),
        ..FoodProduct::default()
    });

    let md = to_markdown(&[favorite, product]);
    assert!(md.contains("**Scans:** 2 (1 favorite)"));
    assert!(md.contains("| url | ★ | https://example.com |"));
    assert!(md.contains("| barcode |  | 3017620422003 | Nutella |"));
}

#[test]
fn test_json_is_array_of_records() {
    let records = vec![ScanRecord::new("one"), ScanRecord::new("two")];
    let json = to_json(&records).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["data"], "two");
}
