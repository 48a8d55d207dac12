//! HTML parsing and data extraction.
//!
//! This module extracts the SEO-relevant parts of a page:
//! - Title and meta description (CSS selectors via `scraper`)
//! - Structured data (JSON-LD blocks and their schema.org types)

mod html;
mod structured;

// Re-export public API
pub use html::{extract_meta_description, extract_title};
pub use structured::{extract_json_ld, has_json_ld_marker, schema_types};
