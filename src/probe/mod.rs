//! Live site probes.
//!
//! This module provides the two checks that talk to the live site:
//! - Endpoint status and marker check for each configured path
//! - SEO markup check of the home page
//!
//! Both issue a single GET per URL through the shared client. There are no
//! retries; a transport error or non-200 status becomes an issue string.

mod endpoints;
mod seo;

pub use endpoints::{check_endpoints, record_endpoint_page};
pub use seo::{check_seo, record_seo_summary, summarize_seo, SeoSummary};

/// Status and body of a fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Joins the base URL and a path by plain concatenation.
///
/// A trailing `/` on the base is dropped first, so `http://host/` and `/x`
/// give `http://host/x`.
pub fn page_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// GETs `url` and reads the full body as text.
///
/// The body is read for every status, so an error page's text is available
/// to the caller too.
///
/// # Errors
///
/// Returns the `reqwest::Error` from sending the request or reading the body.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Page, reqwest::Error> {
    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
    Ok(Page { status, body })
}
