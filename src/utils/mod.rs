//! Shared utilities.
//!
//! This module provides:
//! - String sanitization for issue text
//! - Regex and CSS selector compilation for static patterns

mod pattern;
pub mod sanitize;
mod selector;

pub use pattern::compile_regex_unsafe;
pub use selector::parse_selector_unsafe;
