//! Unified error types for anomaly-view.
//!
//! Malformed or partial records are never errors: the parsers substitute
//! documented defaults instead of failing. Errors exist only at the I/O and
//! JSON boundaries, and during report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for anomaly-view operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnomalyViewError {
    /// Errors during record ingestion
    #[error("Failed to parse anomaly records: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(#[from] crate::reports::ReportError),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Expected a top-level JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Convenient Result type for anomaly-view operations
pub type Result<T> = std::result::Result<T, AnomalyViewError>;

impl AnomalyViewError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for AnomalyViewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AnomalyViewError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}
