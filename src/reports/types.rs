//! Report type definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Auto-detect: summary if stdout is a TTY, HTML otherwise
    #[default]
    Auto,
    /// Standalone HTML report
    Html,
    /// Structured JSON output
    Json,
    /// Brief terminal summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            metadata: ReportMetadata::new(),
        }
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the record feed the report was built from
    pub source_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
