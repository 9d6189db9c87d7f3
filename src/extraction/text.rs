//! Text normalization and visible-text extraction
//!
//! This module provides the whitespace normalizer shared by every
//! extraction pass, and the pass that collects human-visible text nodes
//! in document order.

use ego_tree::NodeRef;
use scraper::{Html, Node};
use std::collections::HashSet;
use tracing::debug;

/// Elements whose text content is never rendered to the user.
const NON_RENDERED: [&str; 4] = ["script", "style", "noscript", "template"];

/// Collapse all whitespace runs (spaces, tabs, newlines) to single spaces
/// and trim the ends. Empty input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible-text extraction functionality
pub struct TextExtractor;

impl TextExtractor {
    /// Collect the document's visible text nodes in document order.
    ///
    /// Each node is whitespace-normalized; empty strings are dropped and
    /// duplicates keep only their first occurrence. Text inside
    /// `script`/`style` and other non-rendered elements is skipped.
    pub fn extract(document: &Html) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut texts = Vec::new();
        Self::walk(document.tree.root(), &mut seen, &mut texts);

        debug!("Collected {} unique visible text nodes", texts.len());
        texts
    }

    fn walk(node: NodeRef<'_, Node>, seen: &mut HashSet<String>, texts: &mut Vec<String>) {
        for child in node.children() {
            match child.value() {
                Node::Text(text) => {
                    let cleaned = normalize_text(&text.text);
                    // First occurrence wins; later duplicates are dropped.
                    if !cleaned.is_empty() && seen.insert(cleaned.clone()) {
                        texts.push(cleaned);
                    }
                }
                Node::Element(element) if NON_RENDERED.contains(&element.name()) => {}
                _ => Self::walk(child, seen, texts),
            }
        }
    }
}
