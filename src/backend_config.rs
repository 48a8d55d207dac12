//! Backend configuration check.
//!
//! Looks through a fixed set of candidate config files in the project root for
//! a Supabase setup, and for URL/key assignments next to the keyword. Matched
//! values are never recorded; keys can be secrets.

use std::fs;
use std::sync::LazyLock;

use log::info;
use regex::Regex;

use crate::config::{Config, BACKEND_CONFIG_FILES, BACKEND_KEYWORD};
use crate::models::AuditLog;
use crate::utils::compile_regex_unsafe;

// Loose single-line matches: keyword, then "url"/"key", then a quoted value
const BACKEND_URL_PATTERN: &str = r#"(?i)supabase.*url.*["']([^"']+)["']"#;
const BACKEND_KEY_PATTERN: &str = r#"(?i)supabase.*key.*["']([^"']+)["']"#;

static BACKEND_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BACKEND_URL_PATTERN, "BACKEND_URL_RE"));
static BACKEND_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BACKEND_KEY_PATTERN, "BACKEND_KEY_RE"));

/// What a single config file revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendConfigMatch {
    pub mentions_backend: bool,
    pub has_url: bool,
    pub has_key: bool,
}

/// Inspects config file text for the backend keyword and URL/key patterns.
///
/// URL and key patterns are only tested when the keyword is present.
pub fn inspect_config_content(content: &str) -> BackendConfigMatch {
    if !content.to_lowercase().contains(BACKEND_KEYWORD) {
        return BackendConfigMatch::default();
    }
    BackendConfigMatch {
        mentions_backend: true,
        has_url: BACKEND_URL_RE.is_match(content),
        has_key: BACKEND_KEY_RE.is_match(content),
    }
}

/// Checks the candidate config files under the project root.
///
/// Files that do not exist are skipped silently; unreadable ones are recorded
/// as issues. If no file mentions the backend, that absence is an issue too.
pub fn check_backend_config(config: &Config, log: &mut AuditLog) {
    let mut backend_found = false;

    for file in BACKEND_CONFIG_FILES {
        let path = config.project_root.join(file);
        if !path.exists() {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log.issue(format!("❌ Could not read {}: {}", file, e));
                continue;
            }
        };

        let found = inspect_config_content(&content);
        if !found.mentions_backend {
            continue;
        }

        info!("  ✅ Supabase config found in {}", file);
        backend_found = true;
        log.finding(format!("Supabase config found in {}", file));

        if found.has_url {
            info!("  🔗 Supabase URL pattern found");
            log.finding(format!("Supabase URL pattern found in {}", file));
        }
        if found.has_key {
            info!("  🔑 Supabase key pattern found");
            log.finding(format!("Supabase key pattern found in {}", file));
        }
    }

    if !backend_found {
        log.issue("❌ No Supabase configuration found");
    }
}
