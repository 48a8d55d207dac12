//! Error handling.
//!
//! This module provides:
//! - Typed errors for initialization and configuration
//! - Request error categorization for issue text
//!
//! Check failures never surface as `Err`: they are turned into issue strings
//! at the call site. Only setup (logger, client, config) and the final report
//! write can fail a run.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_request_error, error_chain};
pub use types::{ConfigError, InitializationError, RequestErrorKind};
