//! Script content mining
//!
//! This module performs best-effort lexical extraction from inline script
//! bodies. It does not execute or parse JavaScript; it scans for quoted
//! string literals and for flat (non-nested) JSON object substrings, then
//! normalizes, length-filters, and deduplicates what it finds.

use crate::error::{ExtractionError, Result};
use crate::extraction::text::normalize_text;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Script content mining functionality
pub struct ScriptExtractor;

impl ScriptExtractor {
    /// Mine text candidates from every inline JavaScript block.
    ///
    /// Scripts carrying a non-JavaScript `type` attribute (JSON-LD blocks,
    /// templates) are skipped, as are scripts without a body. The result is
    /// an unordered set; no occurrence order is promised.
    pub fn extract(document: &Html) -> Result<HashSet<String>> {
        let script_selector = Selector::parse("script")
            .map_err(|e| ExtractionError::InvalidSelector(e.to_string()))?;

        // A quoted run where escaped characters do not close the literal.
        let string_literal = Regex::new(r#"["']([^"'\\]*(?:\\.[^"'\\]*)*)["']"#).unwrap();
        // A single {...} pair with no nested braces. Nested objects are out
        // of contract; see the crate docs.
        let flat_object = Regex::new(r"\{[^{}]*\}").unwrap();

        let mut mined = HashSet::new();
        for element in document.select(&script_selector) {
            if !is_javascript_type(element.value().attr("type")) {
                continue;
            }
            let body: String = element.text().collect();
            if body.is_empty() {
                continue;
            }
            Self::mine_script(&body, &string_literal, &flat_object, &mut mined);
        }

        debug!("Mined {} unique strings from inline scripts", mined.len());
        Ok(mined)
    }

    /// Run both lexical passes over one script body and fold the survivors
    /// into `mined`.
    fn mine_script(
        body: &str,
        string_literal: &Regex,
        flat_object: &Regex,
        mined: &mut HashSet<String>,
    ) {
        let mut candidates: Vec<String> = Vec::new();

        for found in flat_object.find_iter(body) {
            match serde_json::from_str::<Value>(found.as_str()) {
                Ok(value) => Self::collect_strings(&value, &mut candidates),
                // Most brace-delimited substrings in real scripts are not
                // JSON; discarding them is the normal path.
                Err(_) => continue,
            }
        }

        for captures in string_literal.captures_iter(body) {
            candidates.push(captures[1].to_string());
        }

        for candidate in candidates {
            let cleaned = normalize_text(&candidate);
            if cleaned.chars().count() > 3 {
                mined.insert(cleaned);
            }
        }
    }

    /// Collect every string value reachable in a JSON tree. Objects
    /// contribute all their values, arrays all their elements; other
    /// scalars are discarded.
    fn collect_strings(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) => out.push(s.clone()),
            Value::Array(items) => {
                for item in items {
                    Self::collect_strings(item, out);
                }
            }
            Value::Object(map) => {
                for item in map.values() {
                    Self::collect_strings(item, out);
                }
            }
            _ => {}
        }
    }
}

/// Whether a `type` attribute designates executable JavaScript. A missing
/// or empty attribute does; so do the common JS MIME types and `module`.
fn is_javascript_type(type_attr: Option<&str>) -> bool {
    match type_attr {
        None => true,
        Some(t) => matches!(
            t.trim().to_ascii_lowercase().as_str(),
            "" | "text/javascript" | "application/javascript" | "module"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine(html: &str) -> HashSet<String> {
        let document = Html::parse_document(html);
        ScriptExtractor::extract(&document).unwrap()
    }

    #[test]
    fn test_string_literals_mined() {
        let mined = mine(r#"<script>var greeting = "hello world";</script>"#);
        assert!(mined.contains("hello world"));
    }

    #[test]
    fn test_short_strings_filtered() {
        // "foo", "bar", "baz" are exactly 3 chars and must not survive.
        let mined = mine(r#"<script>var x = {"a": "foo", "b": ["bar", "baz"]};</script>"#);
        assert!(!mined.contains("foo"));
        assert!(!mined.contains("bar"));
        assert!(!mined.contains("baz"));
    }

    #[test]
    fn test_flat_json_values_mined() {
        let mined = mine(
            r#"<script>window.config = {"endpoint": "https://api.example.com", "attempts": 3};</script>"#,
        );
        assert!(mined.contains("https://api.example.com"));
        // Keys surface through the string-literal pass.
        assert!(mined.contains("endpoint"));
        // Non-string scalars are discarded.
        assert!(!mined.contains("3"));
    }

    #[test]
    fn test_json_array_strings_mined() {
        let mined = mine(r#"<script>var x = {"tags": ["first tag", "second tag"]};</script>"#);
        assert!(mined.contains("first tag"));
        assert!(mined.contains("second tag"));
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        let mined = mine(r#"<script>var s = "say \"hi\" now";</script>"#);
        assert!(mined.contains(r#"say \"hi\" now"#));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let mined = mine(
            r#"<script>var a = "repeated value";</script>
               <script>var b = "repeated value";</script>"#,
        );
        assert!(mined.contains("repeated value"));
        assert_eq!(mined.len(), 1);
    }

    #[test]
    fn test_non_js_type_skipped() {
        let mined = mine(
            r#"<script type="application/ld+json">{"name": "structured only"}</script>
               <script type="text/template"><p>template text</p></script>"#,
        );
        assert!(mined.is_empty());
    }

    #[test]
    fn test_module_type_mined() {
        let mined = mine(r#"<script type="module">const m = "module string";</script>"#);
        assert!(mined.contains("module string"));
    }

    #[test]
    fn test_bodyless_script_ignored() {
        let mined = mine(r#"<script src="/app.js"></script>"#);
        assert!(mined.is_empty());
    }

    #[test]
    fn test_malformed_flat_object_discarded() {
        // Brace-delimited but not JSON; only the quoted literal survives.
        let mined = mine(r#"<script>if (x) { doThing("kept literal"); }</script>"#);
        assert!(mined.contains("kept literal"));
    }

    #[test]
    fn test_mined_strings_are_normalized() {
        let mined = mine("<script>var s = \"  padded \\n value  \";</script>");
        // The literal's raw escape survives, but real whitespace is collapsed.
        assert!(mined.iter().all(|s| *s == normalize_text(s)));
    }
}
