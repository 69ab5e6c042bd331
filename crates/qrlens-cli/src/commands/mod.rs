//! CLI command handlers
//!
//! Scanning and enrichment live in `scan`; history, favorites and
//! settings each have their own module.

pub mod favorites;
pub mod history;
pub mod scan;
pub mod settings;
