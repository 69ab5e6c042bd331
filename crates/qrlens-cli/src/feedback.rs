//! Scan feedback, browser launching and clipboard access

use qrlens_core::{AppSettings, ScanRecord};
use qrlens_scanner::PayloadKind;
use std::io::{IsTerminal, Write};

/// Signal a successful scan according to settings
///
/// The beep is the terminal bell, rung only when stderr is a terminal.
/// Terminals have no haptics, so `vibrate` is only logged.
pub fn scan_success(settings: &AppSettings) {
    if settings.beep {
        let mut stderr = std::io::stderr();
        if stderr.is_terminal() {
            if let Err(e) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
                tracing::debug!("Failed to ring terminal bell: {e}");
            }
        }
    }
    if settings.vibrate {
        tracing::debug!("Vibration requested; no haptic device on a terminal");
    }
}

/// The link to open right after a scan, if any
///
/// Only `url` scans qualify, and only when `auto_open_url` is on.
pub fn auto_open_target(settings: &AppSettings, record: &ScanRecord) -> Option<String> {
    if settings.auto_open_url && record.kind == PayloadKind::Url {
        record.open_target()
    } else {
        None
    }
}

/// Open an `http(s)` URL with the platform's default handler
pub fn open_url(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !is_web_target(url) {
        return Err(format!("Refusing to open non-web target: {url}").into());
    }

    tracing::info!("Opening {url}");
    open::that(url).map_err(|e| format!("Failed to launch browser: {e}"))?;
    Ok(())
}

fn is_web_target(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Put text on the system clipboard
pub fn copy_text(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text)
        .map_err(|e| format!("Failed to copy to clipboard: {e}"))?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
