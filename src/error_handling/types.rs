//! Error type definitions.
//!
//! This module defines the typed errors of initialization and configuration,
//! plus the categories used to label failed HTTP requests in issue text.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for configuration values clap cannot validate.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The base URL does not parse or is not http(s).
    #[error("Invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    /// An endpoint path does not start with '/'.
    #[error("Endpoint '{0}' must start with '/'")]
    InvalidEndpoint(String),

    /// A zero timeout would fail every request.
    #[error("Timeout must be at least one second")]
    ZeroTimeout,
}

/// Categories of failed HTTP requests.
///
/// Used to label transport failures recorded as issues, so a reader can tell
/// a DNS/connect failure from a timeout without parsing the error chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RequestErrorKind {
    Builder,
    Redirect,
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RequestErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestErrorKind::Builder => "request builder error",
            RequestErrorKind::Redirect => "redirect error",
            RequestErrorKind::Timeout => "timed out",
            RequestErrorKind::Connect => "connect error",
            RequestErrorKind::Request => "request error",
            RequestErrorKind::Body => "body error",
            RequestErrorKind::Decode => "decode error",
            RequestErrorKind::Other => "other error",
        }
    }
}
