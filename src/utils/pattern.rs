//! Regex compilation utilities.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the pattern does not compile (indicates a programming error).
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
