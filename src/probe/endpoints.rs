//! Live endpoint check.

use log::{info, warn};

use super::{fetch_page, page_url, Page};
use crate::config::{Config, REACT_ROOT_MARKER, UX_SCRIPT_MARKER};
use crate::error_handling::describe_request_error;
use crate::models::AuditLog;

/// Records what a fetched endpoint page shows.
///
/// A 200 page is a finding, plus one finding per body marker present. Any
/// other status is an issue.
pub fn record_endpoint_page(path: &str, page: &Page, log: &mut AuditLog) {
    if !page.is_ok() {
        warn!("  ❌ {} - Status: {}", path, page.status);
        log.issue(format!("HTTP {} for {}", page.status, path));
        return;
    }

    info!("  ✅ {} - Status: {}", path, page.status);
    log.finding(format!("{} - Status: {}", path, page.status));

    if page.body.contains(REACT_ROOT_MARKER) {
        info!("    📦 React root element found");
        log.finding(format!("React root element found on {}", path));
    }
    if page.body.contains(UX_SCRIPT_MARKER) {
        info!("    🔧 UX improvements script loaded");
        log.finding(format!("UX improvements script loaded on {}", path));
    }
}

/// Requests every configured path on the live site, in order.
pub async fn check_endpoints(client: &reqwest::Client, config: &Config, log: &mut AuditLog) {
    for path in &config.endpoints {
        let url = page_url(config.base_url_trimmed(), path);
        match fetch_page(client, &url).await {
            Ok(page) => record_endpoint_page(path, &page, log),
            Err(e) => {
                let reason = describe_request_error(&e);
                warn!("  ❌ {} - Error: {}", path, reason);
                log.issue(format!("Connection error for {}: {}", path, reason));
            }
        }
    }
}
