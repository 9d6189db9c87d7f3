//! Pagesift - Heuristic HTML Content-Extraction Engine
//!
//! This crate takes one raw HTML document (and an optional base URL) and
//! produces a normalized, deduplicated bundle of human-visible text,
//! script-derived strings, page metadata, outgoing links, and structured
//! (JSON-LD) data.
//!
//! # Architecture
//!
//! ```text
//! raw HTML ──▶ DOM parse (scraper/html5ever)
//!                  │
//!     ┌────────┬───┴────┬─────────┬────────────┐
//!     ▼        ▼        ▼         ▼            ▼
//!  Metadata  Visible  Script    Links     Structured
//!            Text     Mining              Data (JSON-LD)
//!     └────────┴────────┴─────────┴────────────┘
//!                        │
//!                        ▼
//!                 ExtractionResult
//! ```
//!
//! The five passes are independent: each reads the shared document tree
//! and none depends on another's output. The whole extraction is a pure,
//! synchronous computation — no I/O, no shared state across calls, safe
//! to run concurrently from multiple threads.
//!
//! Script mining is lexical, not a JavaScript parser: it collects quoted
//! string literals and flat (non-nested) `{...}` JSON substrings from
//! inline scripts. Nested JSON objects are intentionally outside the
//! flat-brace heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use pagesift::ContentExtractor;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let html = r#"<title>Hello</title><a href="/next">Next page</a>"#;
//!     let result = ContentExtractor::extract(html, Some("https://example.com/"))?;
//!
//!     assert_eq!(result.metadata.title, "Hello");
//!     assert_eq!(result.links[0].url, "https://example.com/next");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod extraction;

// Re-exports for convenience
pub use error::{Error, Result};
pub use extraction::{
    ContentExtractor, ExtractedLink, ExtractionResult, LinkExtractor, MetadataExtractor,
    PageMetadata, ScriptExtractor, StructuredDataExtractor, TextExtractor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
