//! Payload classification tests

use qrlens_scanner::{classify, PayloadKind};

#[test]
fn test_urls() {
    assert_eq!(classify("https://example.com"), PayloadKind::Url);
    assert_eq!(classify("http://example.com/path?q=1"), PayloadKind::Url);
}

#[test]
fn test_url_prefix_is_case_sensitive() {
    assert_eq!(classify("HTTPS://EXAMPLE.COM"), PayloadKind::Text);
    assert_eq!(classify("ftp://example.com"), PayloadKind::Text);
}

#[test]
fn test_wifi_and_contact() {
    assert_eq!(classify("WIFI:T:WPA;S:home;P:pw;;"), PayloadKind::Wifi);
    assert_eq!(
        classify("BEGIN:VCARD\nVERSION:3.0\nFN:Ada\nEND:VCARD"),
        PayloadKind::Contact
    );
    assert_eq!(classify("wifi:T:WPA;S:home;;"), PayloadKind::Text);
}

#[test]
fn test_barcode_lengths() {
    assert_eq!(classify("1234567"), PayloadKind::Text);
    assert_eq!(classify("96385074"), PayloadKind::Barcode);
    assert_eq!(classify("036000291452"), PayloadKind::Barcode);
    assert_eq!(classify("4006381333931"), PayloadKind::Barcode);
    assert_eq!(classify("10012345678902"), PayloadKind::Barcode);
    assert_eq!(classify("123456789012345"), PayloadKind::Text);
}

#[test]
fn test_barcode_is_not_trimmed() {
    assert_eq!(classify(" 4006381333931"), PayloadKind::Text);
    assert_eq!(classify("4006381333931\n"), PayloadKind::Text);
    assert_eq!(classify("4006-381333931"), PayloadKind::Text);
}

#[test]
fn test_plain_text() {
    assert_eq!(classify(""), PayloadKind::Text);
    assert_eq!(classify("hello world"), PayloadKind::Text);
}

#[test]
fn test_url_wins_over_later_rules() {
    // A URL made of digits after the scheme is still a URL
    assert_eq!(classify("https://12345678"), PayloadKind::Url);
}

#[test]
fn test_kind_serializes_lowercase() {
    let json = serde_json::to_string(&PayloadKind::Barcode).unwrap();
    assert_eq!(json, "\"barcode\"");
}
