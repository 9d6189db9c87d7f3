//! Content extraction orchestration
//!
//! This module ties the five extraction passes together: one DOM parse,
//! five independent reads of the tree, one merged result record.

use crate::error::Result;
use crate::extraction::links::{ExtractedLink, LinkExtractor};
use crate::extraction::metadata::{MetadataExtractor, PageMetadata};
use crate::extraction::script::ScriptExtractor;
use crate::extraction::structured::StructuredDataExtractor;
use crate::extraction::text::TextExtractor;
use scraper::Html;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument};

/// Everything extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Human-visible text nodes, normalized, unique, in first-seen order
    pub visible_text: Vec<String>,
    /// Title, description, and keywords
    pub metadata: PageMetadata,
    /// Deduplicated strings mined from inline script bodies (unordered)
    pub js_content: HashSet<String>,
    /// Resolved anchor links in document order; empty without a base URL
    pub links: Vec<ExtractedLink>,
    /// Parsed JSON-LD blocks in document order
    pub structured_data: Vec<Value>,
}

/// Content extraction functionality
pub struct ContentExtractor;

impl ContentExtractor {
    /// Extract text, metadata, script content, links, and structured data
    /// from a raw HTML document.
    ///
    /// The document is parsed once and each pass reads the shared tree.
    /// Per-item problems (a missing tag, one malformed JSON-LD block) are
    /// absorbed inside their pass; only a whole-document failure surfaces
    /// as an error, and it is logged with its cause before returning.
    #[instrument(skip(html), fields(html_len = html.len()))]
    pub fn extract(html: &str, base_url: Option<&str>) -> Result<ExtractionResult> {
        match Self::extract_document(html, base_url) {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Content extraction failed: {}", e);
                Err(e)
            }
        }
    }

    fn extract_document(html: &str, base_url: Option<&str>) -> Result<ExtractionResult> {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!(
                "Parser recovered from {} markup errors",
                document.errors.len()
            );
        }

        let metadata = MetadataExtractor::extract(&document)?;
        let visible_text = TextExtractor::extract(&document);
        let js_content = ScriptExtractor::extract(&document)?;
        let links = LinkExtractor::extract(&document, base_url)?;
        let structured_data = StructuredDataExtractor::extract(&document)?;

        let result = ExtractionResult {
            visible_text,
            metadata,
            js_content,
            links,
            structured_data,
        };

        info!(
            "Extracted {} text nodes, {} script strings, {} links, {} structured blocks",
            result.visible_text.len(),
            result.js_content.len(),
            result.links.len(),
            result.structured_data.len()
        );

        Ok(result)
    }
}
