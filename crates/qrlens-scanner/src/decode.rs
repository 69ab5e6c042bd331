//! Image decoding
//!
//! Thin wrapper over `rqrr`: load an image, convert it to greyscale,
//! decode every QR grid found and classify the text.

use crate::error::{ScanError, ScanResult};
use crate::payload::{classify, PayloadKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A code decoded from an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCode {
    /// Decoded text, verbatim
    pub text: String,
    pub kind: PayloadKind,
    /// QR version (1-40)
    pub version: usize,
    /// Error correction level (0-3)
    pub ecc_level: u16,
}

/// Decode all QR codes in an image file
///
/// An image without any decodable code yields an empty list.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a supported image
pub fn decode_image(path: &Path) -> ScanResult<Vec<DecodedCode>> {
    let img = image::open(path)?.to_luma8();
    let (width, height) = img.dimensions();
    tracing::debug!("Decoding {} ({width}x{height})", path.display());
    decode_luma(width as usize, height as usize, img.as_raw())
}

/// Decode all QR codes in a row-major 8-bit greyscale buffer
///
/// # Errors
/// Returns an error if `pixels` is not exactly `width * height` bytes
pub fn decode_luma(width: usize, height: usize, pixels: &[u8]) -> ScanResult<Vec<DecodedCode>> {
    let expected = width * height;
    if pixels.len() != expected {
        return Err(ScanError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| pixels[y * width + x]);
    let grids = prepared.detect_grids();
    tracing::debug!("Found {} candidate grid(s)", grids.len());

    let mut codes = Vec::new();
    for grid in grids {
        match grid.decode() {
            Ok((meta, text)) => {
                codes.push(DecodedCode {
                    kind: classify(&text),
                    text,
                    version: meta.version.0,
                    ecc_level: meta.ecc_level,
                });
            }
            Err(e) => tracing::warn!("Skipping undecodable QR grid: {e}"),
        }
    }

    Ok(codes)
}
