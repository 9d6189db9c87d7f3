//! Error types for Pagesift
//!
//! This module provides the error type hierarchy using `thiserror`
//! for proper error handling across all components.

use thiserror::Error;

/// The main error type for Pagesift operations
#[derive(Error, Debug)]
pub enum Error {
    /// Content extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Content extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Invalid selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Document parsing failed
    #[error("Document parsing failed: {0}")]
    ParsingFailed(String),

    /// Extraction failed
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),
}

/// Result type alias for Pagesift operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Extraction(ExtractionError::ParsingFailed("not a document".to_string()));
        assert!(err.to_string().contains("Document parsing failed"));
        assert!(err.to_string().contains("not a document"));
    }

    #[test]
    fn test_invalid_selector_error() {
        let err = ExtractionError::InvalidSelector("a[href".to_string());
        assert_eq!(err.to_string(), "Invalid selector: a[href");
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
