//! qrlens Scanner - decoding and payload classification
//!
//! This crate wraps the third-party QR decoder, tags decoded text with a
//! payload kind, and parses structured payloads (Wi-Fi, vCard, barcodes).

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod decode;
pub mod error;
pub mod parse;
pub mod payload;

pub use decode::{decode_image, decode_luma, DecodedCode};
pub use error::{ScanError, ScanResult};
pub use parse::{ContactCard, PayloadDetails, WifiConfig};
pub use payload::{classify, PayloadKind};
