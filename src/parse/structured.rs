//! Structured data extraction.
//!
//! Finds JSON-LD (`application/ld+json`) script blocks and the schema.org
//! `@type` values they declare.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::JSON_LD_MARKER;
use crate::utils::compile_regex_unsafe;

// Script tags with a JSON-LD type attribute, either quote style, any case
const JSON_LD_DOUBLE_PATTERN: &str =
    "(?is)<script[^>]*type\\s*=\\s*\"application/ld\\+json\"[^>]*>(.*?)</script>";
const JSON_LD_SINGLE_PATTERN: &str =
    "(?is)<script[^>]*type\\s*=\\s*'application/ld\\+json'[^>]*>(.*?)</script>";

static JSON_LD_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile_regex_unsafe(JSON_LD_DOUBLE_PATTERN, "JSON_LD_DOUBLE_RE"),
        compile_regex_unsafe(JSON_LD_SINGLE_PATTERN, "JSON_LD_SINGLE_RE"),
    ]
});

/// Whether the page mentions the JSON-LD media type at all.
///
/// This is a plain substring test, true even when the block does not parse.
pub fn has_json_ld_marker(html: &str) -> bool {
    html.contains(JSON_LD_MARKER)
}

/// Parses every JSON-LD block in the page.
///
/// A block holding an array contributes each element. Blocks that are not
/// valid JSON are skipped.
pub fn extract_json_ld(html: &str) -> Vec<serde_json::Value> {
    let mut values = Vec::new();

    for re in JSON_LD_RES.iter() {
        for cap in re.captures_iter(html) {
            let Some(body) = cap.get(1) else { continue };
            match serde_json::from_str::<serde_json::Value>(body.as_str().trim()) {
                Ok(serde_json::Value::Array(items)) => values.extend(items),
                Ok(value) => values.push(value),
                Err(e) => log::debug!("Skipping unparsable JSON-LD block: {}", e),
            }
        }
    }

    values
}

/// Collects `@type` values (string or array of strings) from JSON-LD objects.
///
/// Objects nested under `@graph` are included. Order follows the document and
/// duplicates are dropped.
pub fn schema_types(json_ld: &[serde_json::Value]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    let mut push = |t: &str| {
        if !types.iter().any(|seen| seen == t) {
            types.push(t.to_string());
        }
    };

    let mut stack: Vec<&serde_json::Value> = json_ld.iter().rev().collect();
    while let Some(value) = stack.pop() {
        let Some(obj) = value.as_object() else {
            continue;
        };
        match obj.get("@type") {
            Some(serde_json::Value::String(t)) => push(t),
            Some(serde_json::Value::Array(items)) => {
                items.iter().filter_map(|t| t.as_str()).for_each(&mut push)
            }
            _ => {}
        }
        if let Some(serde_json::Value::Array(graph)) = obj.get("@graph") {
            stack.extend(graph.iter().rev());
        }
    }

    types
}
