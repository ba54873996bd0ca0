//! Error handling module for quotient
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.
//!
//! Selection-level lookups (toggling or re-quantifying an unknown key) are
//! deliberately *not* errors; the aggregator treats them as no-ops.

use thiserror::Error;

/// Main error type for quotient
#[derive(Error, Debug)]
pub enum QuotientError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog errors (loading, parsing, validation)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Snapshot export errors
    #[error("Export error: {0}")]
    Export(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for quotient operations
pub type Result<T> = std::result::Result<T, QuotientError>;

// Convenient error constructors
impl QuotientError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> QuotientError {
    QuotientError::General(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuotientError::catalog("duplicate item name");
        assert_eq!(err.to_string(), "Catalog error: duplicate item name");

        let err = QuotientError::export("directory not writable");
        assert_eq!(err.to_string(), "Export error: directory not writable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QuotientError = io_err.into();
        assert!(matches!(err, QuotientError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = QuotientError::terminal("raw mode failed");
        assert!(matches!(err, QuotientError::Terminal(_)));

        let err = general_error("unexpected");
        assert!(matches!(err, QuotientError::General(_)));
    }
}
