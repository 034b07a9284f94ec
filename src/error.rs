//! Error types for the article library
//!
//! This module provides centralized error handling using `thiserror` across all components

use thiserror::Error;

/// Parse-related errors
///
/// The parser is total over its input: malformed or unmatched markup
/// degrades to literal text rather than failing. The only runtime error
/// is the guard against pathologically nested formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum ParseError {
    /// Formatting constructs nested deeper than the configured limit
    #[error("Formatting nested deeper than the limit of {limit}")]
    DepthExceeded { limit: u32 },
}

impl ParseError {
    /// Create a depth exceeded error for the given limit
    #[must_use]
    pub const fn depth_exceeded(limit: u32) -> Self {
        Self::DepthExceeded { limit }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_exceeded_display() {
        let err = ParseError::depth_exceeded(64);
        assert!(err.to_string().contains("64"));
        assert!(err.to_string().contains("nested"));
    }
}
