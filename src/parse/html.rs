//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract the SEO basics of a page:
//! - Page title
//! - Meta description

use scraper::{Html, Selector};
use std::sync::LazyLock;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});

/// Extracts the page title from an HTML document.
///
/// Returns the text of the first `<title>` element, trimmed, or `None` if
/// there is no title element or its text is blank.
pub fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    // text() decodes entities and flattens nested nodes
    let title = element.text().collect::<String>().trim().to_string();
    log::debug!("Extracted title text: '{}'", title);
    (!title.is_empty()).then_some(title)
}

/// Extracts the meta description from an HTML document.
///
/// Searches for `<meta name="description">` and returns its `content`,
/// trimmed. A missing or blank `content` counts as no description.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
