//! Configuration constants.
//!
//! This module defines the fixed values the analysis runs with when no CLI
//! override is given: project location, live site, probed paths and limits.

/// Project checkout that holds the built web application.
pub const DEFAULT_PROJECT_ROOT: &str = "/home/ubuntu/trustup24-frontend";

/// Directory (relative to the project root) holding the bundled script files.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Report file name, written under the project root.
pub const DEFAULT_REPORT_FILE: &str = "system_analysis_report.txt";

/// Label printed in the report header.
pub const DEFAULT_SITE_NAME: &str = "TRUSTUP24";

/// Live site probed by the endpoint and SEO checks.
pub const DEFAULT_BASE_URL: &str = "http://trustup24.ae";

/// Paths requested on the live site, in order.
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "/",
    "/anbieter-finden.html",
    "/matching-finden.html",
    "/anbieter-vergleichen.html",
];

/// Per-request timeout in seconds. No retries are made.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Candidate backend configuration files, relative to the project root.
pub const BACKEND_CONFIG_FILES: &[&str] = &["supabase.js", "config.js", ".env", ".env.local"];

/// Keyword that marks a backend integration in scripts and config files.
pub const BACKEND_KEYWORD: &str = "supabase";

/// Extension of the bundled script files.
pub const SCRIPT_EXTENSION: &str = "js";

// Markers looked for in live page bodies
pub const REACT_ROOT_MARKER: &str = r#"id="root""#;
pub const UX_SCRIPT_MARKER: &str = "ux-improvements.js";
pub const JSON_LD_MARKER: &str = "application/ld+json";

/// Maximum error message length in characters (2000 chars)
/// Error messages longer than this are truncated with a note about the original length
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

/// Width of the `=` rule under the written report's title.
pub const REPORT_RULE_WIDTH: usize = 40;

/// Width of the `=` banner used for console output.
pub const CONSOLE_RULE_WIDTH: usize = 60;
