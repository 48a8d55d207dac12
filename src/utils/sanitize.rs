//! Utilities for sanitizing error messages.
//!
//! Error text from I/O and HTTP failures is recorded verbatim as issues, so it
//! is stripped of control characters and capped in length first.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Removes control characters from an error message.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) garble
/// terminal output and the written report. Non-ASCII text is kept.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 || code == 0x09 || code == 0x0A || code == 0x0D
        })
        .collect()
}

/// Sanitizes a message, then truncates it to `MAX_ERROR_MESSAGE_LENGTH` bytes.
///
/// Truncation backs off to the nearest char boundary and appends a note with
/// the original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    if sanitized.len() <= MAX_ERROR_MESSAGE_LENGTH {
        return sanitized;
    }

    // Leave room for the truncation note
    let mut cut = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
    while !sanitized.is_char_boundary(cut) {
        cut -= 1;
    }
    format!(
        "{}... (truncated, original length: {} chars)",
        &sanitized[..cut],
        sanitized.chars().count()
    )
}

/// Sanitizes and truncates a report entry, folding line breaks and tabs into spaces.
///
/// Every finding and issue must render as exactly one report line, and entry
/// text can come from scanned bundles or fetched pages.
pub fn sanitize_report_entry(message: &str) -> String {
    sanitize_and_truncate_error_message(message).replace(['\n', '\r', '\t'], " ")
}
