//! Structured-data (JSON-LD) extraction
//!
//! This module collects `application/ld+json` script blocks, parsing each
//! body as plain JSON and keeping successfully parsed values in document
//! order.

use crate::error::{ExtractionError, Result};
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

/// Structured-data extraction functionality
pub struct StructuredDataExtractor;

impl StructuredDataExtractor {
    /// Parse every JSON-LD block in the document.
    ///
    /// A malformed block is skipped silently; it never aborts the overall
    /// extraction. Any JSON type is accepted, not only objects.
    pub fn extract(document: &Html) -> Result<Vec<Value>> {
        let ld_json_selector = Selector::parse(r#"script[type="application/ld+json"]"#)
            .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;

        let mut blocks = Vec::new();
        for element in document.select(&ld_json_selector) {
            let body: String = element.text().collect();
            if body.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Value>(&body) {
                Ok(value) => blocks.push(value),
                Err(e) => {
                    debug!("Skipping malformed ld+json block: {}", e);
                }
            }
        }

        debug!("Extracted {} structured data blocks", blocks.len());
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(html: &str) -> Vec<Value> {
        let document = Html::parse_document(html);
        StructuredDataExtractor::extract(&document).unwrap()
    }

    #[test]
    fn test_parses_ld_json_object() {
        let blocks = extract(
            r#"<script type="application/ld+json">
                {"@type": "Article", "headline": "Test"}
            </script>"#,
        );
        assert_eq!(blocks, vec![json!({"@type": "Article", "headline": "Test"})]);
    }

    #[test]
    fn test_non_object_json_accepted() {
        let blocks = extract(r#"<script type="application/ld+json">[1, 2, 3]</script>"#);
        assert_eq!(blocks, vec![json!([1, 2, 3])]);
    }

    #[test]
    fn test_malformed_block_skipped() {
        let blocks = extract(
            r#"<script type="application/ld+json">{not json</script>
               <script type="application/ld+json">{"ok": true}</script>"#,
        );
        assert_eq!(blocks, vec![json!({"ok": true})]);
    }

    #[test]
    fn test_document_order_preserved() {
        let blocks = extract(
            r#"<script type="application/ld+json">{"n": 1}</script>
               <script type="application/ld+json">{"n": 2}</script>"#,
        );
        assert_eq!(blocks, vec![json!({"n": 1}), json!({"n": 2})]);
    }

    #[test]
    fn test_plain_scripts_ignored() {
        let blocks = extract(r#"<script>var x = {"not": "structured"};</script>"#);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_empty_body_skipped() {
        let blocks = extract(r#"<script type="application/ld+json">   </script>"#);
        assert!(blocks.is_empty());
    }
}
