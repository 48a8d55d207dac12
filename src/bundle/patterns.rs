//! Regex extraction over bundled script text.
//!
//! Bundles are minified output, so these patterns look for surface syntax
//! (declarations, `path=` props, call sites) rather than parsing JavaScript.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BACKEND_KEYWORD;
use crate::utils::compile_regex_unsafe;

// Identifier-like tokens that name components or top-level functions
const FUNCTION_DECL_PATTERN: &str = r"function\s+(\w+)\s*\(";
const CONST_ARROW_PATTERN: &str = r"const\s+(\w+)\s*=\s*\(";
const CLASS_EXTENDS_PATTERN: &str = r"class\s+(\w+)\s+extends";
const EXPORT_DEFAULT_PATTERN: &str = r"export\s+default\s+(\w+)";

const ROUTE_PATH_PATTERN: &str = r#"path=["']([^"']+)["']"#;

const FETCH_CALL_PATTERN: &str = r#"fetch\s*\(["']([^"']+)["']"#;
const AXIOS_CALL_PATTERN: &str = r#"axios\.(?:get|post|put|delete)\(["']([^"']+)["']"#;
const BACKEND_CLIENT_PATTERN: &str = r"supabase\.";

static COMPONENT_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        compile_regex_unsafe(FUNCTION_DECL_PATTERN, "FUNCTION_DECL_RE"),
        compile_regex_unsafe(CONST_ARROW_PATTERN, "CONST_ARROW_RE"),
        compile_regex_unsafe(CLASS_EXTENDS_PATTERN, "CLASS_EXTENDS_RE"),
        compile_regex_unsafe(EXPORT_DEFAULT_PATTERN, "EXPORT_DEFAULT_RE"),
    ]
});
static ROUTE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ROUTE_PATH_PATTERN, "ROUTE_PATH_RE"));
static API_CALL_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        compile_regex_unsafe(FETCH_CALL_PATTERN, "FETCH_CALL_RE"),
        compile_regex_unsafe(AXIOS_CALL_PATTERN, "AXIOS_CALL_RE"),
    ]
});
static BACKEND_CLIENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BACKEND_CLIENT_PATTERN, "BACKEND_CLIENT_RE"));

/// What one script file revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptAnalysis {
    /// Declared component/function names, sorted and unique
    pub components: BTreeSet<String>,
    /// `path="..."` values, in source order (only collected in routing code)
    pub routes: Vec<String>,
    /// `fetch(...)` targets followed by `axios.<verb>(...)` targets, each in source order
    pub api_calls: Vec<String>,
    /// Number of `supabase.` member accesses
    pub backend_client_calls: usize,
    /// Whether the backend keyword appears anywhere (case-insensitive)
    pub backend_integration: bool,
    /// Whether `onSubmit` or `handleSubmit` appears
    pub form_handling: bool,
}

fn first_groups<'a>(re: &'a Regex, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    re.captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}

/// Extracts components, routes and API-call targets from script text.
///
/// Routes are only collected when the text mentions `Route` (which also
/// covers `Router`), so stray `path=` attributes in non-routing code are
/// ignored.
pub fn analyze_script_content(content: &str) -> ScriptAnalysis {
    let components = COMPONENT_RES
        .iter()
        .flat_map(|re| first_groups(re, content))
        .map(str::to_string)
        .collect();

    let routes = if content.contains("Route") {
        first_groups(&ROUTE_PATH_RE, content)
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    let api_calls = API_CALL_RES
        .iter()
        .flat_map(|re| first_groups(re, content))
        .map(str::to_string)
        .collect();

    ScriptAnalysis {
        components,
        routes,
        api_calls,
        backend_client_calls: BACKEND_CLIENT_RE.find_iter(content).count(),
        backend_integration: content.to_lowercase().contains(BACKEND_KEYWORD),
        form_handling: content.contains("onSubmit") || content.contains("handleSubmit"),
    }
}
