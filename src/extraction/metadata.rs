//! Page metadata extraction
//!
//! This module extracts document-level metadata: the title, the meta
//! description, and the meta keywords list.

use crate::error::{ExtractionError, Result};
use crate::extraction::text::normalize_text;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extracted page metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Document title, whitespace-normalized; empty if absent
    pub title: String,
    /// Meta description, whitespace-normalized; empty if absent
    pub description: String,
    /// Meta keywords, split on commas and trimmed; empty if absent
    pub keywords: Vec<String>,
}

/// Metadata extraction functionality
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract title, description, and keywords from the document.
    ///
    /// Absent elements degrade to empty defaults; this pass never aborts
    /// the overall extraction.
    pub fn extract(document: &Html) -> Result<PageMetadata> {
        let title_selector = Selector::parse("title")
            .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;
        let description_selector = Selector::parse(r#"meta[name="description"]"#)
            .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;
        let keywords_selector = Selector::parse(r#"meta[name="keywords"]"#)
            .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;

        let title = document
            .select(&title_selector)
            .next()
            .map(|element| normalize_text(&element.text().collect::<String>()))
            .unwrap_or_default();

        let description = document
            .select(&description_selector)
            .next()
            .and_then(|element| element.value().attr("content"))
            .map(normalize_text)
            .unwrap_or_default();

        let keywords = document
            .select(&keywords_selector)
            .next()
            .and_then(|element| element.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(|content| content.split(',').map(|k| k.trim().to_string()).collect())
            .unwrap_or_default();

        let metadata = PageMetadata {
            title,
            description,
            keywords,
        };

        debug!(
            "Extracted metadata: title={:?}, {} keywords",
            metadata.title,
            metadata.keywords.len()
        );

        Ok(metadata)
    }
}
