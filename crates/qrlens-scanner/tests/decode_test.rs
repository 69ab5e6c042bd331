//! Image decoding tests
//!
//! QR images are synthesized with the `qrcode` encoder, then decoded.

use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use qrlens_scanner::{decode_image, decode_luma, PayloadKind, ScanError};
use tempfile::TempDir;

const SCALE: usize = 8;
const QUIET_ZONE: usize = 4;

/// Render `data` as a greyscale QR image with a quiet zone
fn render_qr(data: &str) -> (usize, Vec<u8>) {
    let code = QrCode::new(data.as_bytes()).expect("Failed to encode QR");
    let modules = code.width();
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * SCALE;

    let mut pixels = vec![255u8; side * side];
    for y in 0..side {
        for x in 0..side {
            let mx = (x / SCALE).checked_sub(QUIET_ZONE);
            let my = (y / SCALE).checked_sub(QUIET_ZONE);
            if let (Some(mx), Some(my)) = (mx, my) {
                if mx < modules && my < modules && colors[my * modules + mx] == Color::Dark {
                    pixels[y * side + x] = 0;
                }
            }
        }
    }
    (side, pixels)
}

#[test]
fn test_decode_luma_url() {
    let (side, pixels) = render_qr("https://example.com/menu");
    let codes = decode_luma(side, side, &pixels).expect("Decode failed");

    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].text, "https://example.com/menu");
    assert_eq!(codes[0].kind, PayloadKind::Url);
    assert!(codes[0].version >= 1);
}

#[test]
fn test_decode_blank_image_is_empty() {
    let pixels = vec![255u8; 64 * 64];
    let codes = decode_luma(64, 64, &pixels).expect("Decode failed");
    assert!(codes.is_empty());
}

#[test]
fn test_decode_luma_rejects_wrong_buffer_size() {
    let err = decode_luma(10, 10, &[0u8; 50]).unwrap_err();
    assert!(matches!(
        err,
        ScanError::BufferSize {
            expected: 100,
            actual: 50
        }
    ));
}

#[test]
fn test_decode_image_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("wifi.png");

    let (side, pixels) = render_qr("WIFI:T:WPA;S:Office;P:letmein;;");
    let side_u32 = u32::try_from(side).unwrap();
    let img = GrayImage::from_fn(side_u32, side_u32, |x, y| {
        Luma([pixels[y as usize * side + x as usize]])
    });
    img.save(&path).expect("Failed to write PNG");

    let codes = decode_image(&path).expect("Decode failed");
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].kind, PayloadKind::Wifi);
}

#[test]
fn test_decode_missing_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let result = decode_image(&temp.path().join("nope.png"));
    assert!(result.is_err());
}
