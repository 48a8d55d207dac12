//! SEO structure check of the home page.

use log::{info, warn};
use scraper::Html;

use super::fetch_page;
use crate::config::Config;
use crate::error_handling::describe_request_error;
use crate::models::AuditLog;
use crate::parse::{
    extract_json_ld, extract_meta_description, extract_title, has_json_ld_marker, schema_types,
};

/// SEO basics extracted from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoSummary {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub has_structured_data: bool,
    pub schema_types: Vec<String>,
}

/// Extracts title, meta description and structured data from page HTML.
pub fn summarize_seo(html: &str) -> SeoSummary {
    let document = Html::parse_document(html);
    let has_structured_data = has_json_ld_marker(html);
    let types = if has_structured_data {
        schema_types(&extract_json_ld(html))
    } else {
        Vec::new()
    };

    SeoSummary {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        has_structured_data,
        schema_types: types,
    }
}

/// Records findings and issues for an SEO summary.
///
/// Missing title and description are issues. Missing structured data is only
/// logged as a warning.
pub fn record_seo_summary(summary: &SeoSummary, log: &mut AuditLog) {
    match &summary.title {
        Some(title) => {
            info!("  ✅ Title: {}", title);
            log.finding(format!("Title: {}", title));
        }
        None => log.issue("❌ No title tag found"),
    }

    match &summary.meta_description {
        Some(_) => {
            info!("  ✅ Meta description found");
            log.finding("Meta description found");
        }
        None => log.issue("❌ No meta description found"),
    }

    if !summary.has_structured_data {
        warn!("  ⚠️  No structured data found");
    } else if summary.schema_types.is_empty() {
        info!("  ✅ Structured data (JSON-LD) found");
        log.finding("Structured data (JSON-LD) found");
    } else {
        let types = summary.schema_types.join(", ");
        info!("  ✅ Structured data (JSON-LD) found: {}", types);
        log.finding(format!("Structured data (JSON-LD) found: {}", types));
    }
}

/// Fetches the base URL once and checks its SEO markup.
pub async fn check_seo(client: &reqwest::Client, config: &Config, log: &mut AuditLog) {
    match fetch_page(client, &config.base_url).await {
        Ok(page) if page.is_ok() => record_seo_summary(&summarize_seo(&page.body), log),
        Ok(page) => {
            warn!("  ❌ SEO check - Status: {}", page.status);
            log.issue(format!("HTTP {} for SEO check", page.status));
        }
        Err(e) => log.issue(format!(
            "❌ Could not check SEO structure: {}",
            describe_request_error(&e)
        )),
    }
}
