//! Content extraction module
//!
//! This module provides heuristic content extraction from raw HTML,
//! including visible text, metadata, script-mined strings, links, and
//! structured data.

pub mod content;
pub mod links;
pub mod metadata;
pub mod script;
pub mod structured;
pub mod text;

pub use content::{ContentExtractor, ExtractionResult};
pub use links::{ExtractedLink, LinkExtractor};
pub use metadata::{MetadataExtractor, PageMetadata};
pub use script::ScriptExtractor;
pub use structured::StructuredDataExtractor;
pub use text::{normalize_text, TextExtractor};
