//! Link extraction
//!
//! This module collects anchor links in document order, resolving each
//! `href` against the document's base URL.

use crate::error::{ExtractionError, Result};
use crate::extraction::text::normalize_text;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

/// An extracted link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLink {
    /// The resolved, absolute URL
    pub url: String,
    /// Link text content, whitespace-normalized
    pub text: String,
}

/// Link extraction functionality
pub struct LinkExtractor;

impl LinkExtractor {
    /// Extract every anchor with a resolvable `href` and non-empty text.
    ///
    /// Without a base URL there is nothing to resolve against and the
    /// result is empty. Repeated anchors are kept; each occurrence is one
    /// entry, in document order.
    pub fn extract(document: &Html, base_url: Option<&str>) -> Result<Vec<ExtractedLink>> {
        let Some(base_url) = base_url else {
            return Ok(Vec::new());
        };

        let base = match Url::parse(base_url) {
            Ok(base) => base,
            Err(e) => {
                warn!("Unusable base URL {:?}: {}", base_url, e);
                return Ok(Vec::new());
            }
        };

        let anchor_selector = Selector::parse("a[href]")
            .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;

        let mut links = Vec::new();
        for element in document.select(&anchor_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if href.is_empty() {
                continue;
            }
            let resolved = match base.join(href) {
                Ok(resolved) => resolved,
                Err(e) => {
                    debug!("Skipping unresolvable href {:?}: {}", href, e);
                    continue;
                }
            };

            let text = normalize_text(&element.text().collect::<String>());
            let url = resolved.to_string();
            if !url.is_empty() && !text.is_empty() {
                links.push(ExtractedLink { url, text });
            }
        }

        debug!("Extracted {} links", links.len());
        Ok(links)
    }
}
