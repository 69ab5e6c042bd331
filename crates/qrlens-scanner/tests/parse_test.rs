//! Structured payload parsing tests

use qrlens_scanner::parse::{Symbology, WifiAuth};
use qrlens_scanner::{ContactCard, PayloadDetails, ScanError, WifiConfig};

#[test]
fn test_wifi_basic() {
    let config = WifiConfig::parse("WIFI:T:WPA;S:HomeNet;P:hunter2;;").unwrap();
    assert_eq!(config.ssid, "HomeNet");
    assert_eq!(config.auth, WifiAuth::Wpa);
    assert_eq!(config.password.as_deref(), Some("hunter2"));
    assert!(!config.hidden);
}

#[test]
fn test_wifi_fields_in_any_order_with_escapes() {
    let config = WifiConfig::parse(r"WIFI:P:a\;b\:c;H:true;S:My\,Net;T:WEP;;").unwrap();
    assert_eq!(config.ssid, "My,Net");
    assert_eq!(config.password.as_deref(), Some("a;b:c"));
    assert_eq!(config.auth, WifiAuth::Wep);
    assert!(config.hidden);
}

#[test]
fn test_wifi_backslash_n_is_a_literal_n() {
    let config = WifiConfig::parse(r"WIFI:S:net;P:ab\ncd;;").unwrap();
    assert_eq!(config.password.as_deref(), Some("abncd"));
}

#[test]
fn test_wifi_open_network() {
    let config = WifiConfig::parse("WIFI:S:Cafe;;").unwrap();
    assert_eq!(config.auth, WifiAuth::Nopass);
    assert_eq!(config.password, None);

    let config = WifiConfig::parse("WIFI:T:nopass;S:Cafe;P:;;").unwrap();
    assert_eq!(config.auth, WifiAuth::Nopass);
    assert_eq!(config.password, None);
}

#[test]
fn test_wifi_missing_ssid() {
    let err = WifiConfig::parse("WIFI:T:WPA;P:secret;;").unwrap_err();
    assert!(matches!(err, ScanError::InvalidWifi(_)));
}

#[test]
fn test_vcard_fields() {
    let card = ContactCard::parse(
        "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Lovelace;Ada;;Countess;\r\nFN:Ada Lovelace\r\n\
         ORG:Analytical Engines;Research\r\nTITLE:Mathematician\r\n\
         TEL;TYPE=CELL:+44 20 1234 5678\r\nTEL;TYPE=WORK:+44 20 8765 4321\r\n\
         EMAIL:ada@example.com\r\nURL:https://example.com/ada\r\n\
         ADR;TYPE=HOME:;;12 St James\\, Square;London;;SW1;UK\r\nEND:VCARD",
    )
    .unwrap();

    assert_eq!(card.formatted_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(card.name.as_deref(), Some("Countess Ada Lovelace"));
    assert_eq!(card.organization.as_deref(), Some("Analytical Engines, Research"));
    assert_eq!(card.title.as_deref(), Some("Mathematician"));
    assert_eq!(card.phones, vec!["+44 20 1234 5678", "+44 20 8765 4321"]);
    assert_eq!(card.emails, vec!["ada@example.com"]);
    assert_eq!(card.url.as_deref(), Some("https://example.com/ada"));
    assert_eq!(
        card.address.as_deref(),
        Some("12 St James, Square, London, SW1, UK")
    );
}

#[test]
fn test_vcard_folded_lines_and_name_fallback() {
    let card = ContactCard::parse("BEGIN:VCARD\nN:Hopper;Grace\nNOTE:long\n  continued\nEND:VCARD")
        .unwrap();
    assert_eq!(card.formatted_name, None);
    assert_eq!(card.display_name(), Some("Grace Hopper"));
}

#[test]
fn test_vcard_requires_begin() {
    let err = ContactCard::parse("FN:Nobody").unwrap_err();
    assert!(matches!(err, ScanError::InvalidContact(_)));
}

#[test]
fn test_details_for_barcode() {
    let details = PayloadDetails::from_payload("4006381333931");
    assert_eq!(
        details,
        PayloadDetails::Barcode {
            symbology: Symbology::Ean13,
            check_digit_valid: Some(true),
        }
    );
    assert_eq!(details.summary(), "EAN-13 barcode");

    let details = PayloadDetails::from_payload("4006381333932");
    assert_eq!(details.summary(), "EAN-13 barcode (check digit mismatch)");

    let details = PayloadDetails::from_payload("123456789");
    assert_eq!(
        details,
        PayloadDetails::Barcode {
            symbology: Symbology::Numeric,
            check_digit_valid: None,
        }
    );
}

#[test]
fn test_details_for_url() {
    let details = PayloadDetails::from_payload("http://Example.org:8080/login");
    assert_eq!(
        details,
        PayloadDetails::Url {
            host: Some("example.org".to_string()),
            secure: false,
        }
    );
    assert_eq!(details.summary(), "Link to example.org (not encrypted)");
}

#[test]
fn test_malformed_wifi_degrades_to_text() {
    let details = PayloadDetails::from_payload("WIFI:T:WPA;;");
    assert!(matches!(details, PayloadDetails::Text { .. }));
}

#[test]
fn test_details_summary_for_wifi_and_text() {
    let details = PayloadDetails::from_payload("WIFI:T:WPA;S:Lab;P:x;H:true;;");
    assert_eq!(details.summary(), "Wi-Fi network \"Lab\" (WPA, hidden)");

    let details = PayloadDetails::from_payload("one\ntwo");
    assert_eq!(details.summary(), "Text, 7 characters on 2 lines");
}
