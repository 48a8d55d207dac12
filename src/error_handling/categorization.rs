//! Request error categorization.
//!
//! This module turns `reqwest::Error` values into the short, readable text
//! recorded in the issues list.

use std::error::Error as StdError;

use super::types::RequestErrorKind;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Categorizes a `reqwest::Error` into a `RequestErrorKind`.
///
/// Timeouts are checked before connect failures, so a connect that timed out
/// is reported as a timeout.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RequestErrorKind {
    if error.is_builder() {
        RequestErrorKind::Builder
    } else if error.is_redirect() {
        RequestErrorKind::Redirect
    } else if error.is_timeout() {
        RequestErrorKind::Timeout
    } else if error.is_connect() {
        RequestErrorKind::Connect
    } else if error.is_request() {
        RequestErrorKind::Request
    } else if error.is_body() {
        RequestErrorKind::Body
    } else if error.is_decode() {
        RequestErrorKind::Decode
    } else {
        RequestErrorKind::Other
    }
}

/// Joins an error and all of its sources with `": "`.
///
/// reqwest's top-level message rarely names the cause ("error sending request
/// for url ..."); the root cause sits at the end of the source chain.
pub fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p == &text) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

/// Builds the issue text for a failed request: `"<kind>: <error chain>"`.
pub fn describe_request_error(error: &reqwest::Error) -> String {
    let kind = categorize_reqwest_error(error);
    sanitize_and_truncate_error_message(&format!("{}: {}", kind, error_chain(error)))
}
