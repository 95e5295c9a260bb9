//! Report generation for anomaly records.
//!
//! This module provides multiple output formats for a record feed:
//! - HTML: styled per-record cards for stakeholder pages
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly output
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation. All
//! feed-controlled data (addresses, attack labels, sensor names, timestamps)
//! is escaped before embedding in HTML reports.

pub mod cards;
pub mod escape;
mod html;
mod json;
mod summary;
mod types;

pub use cards::{build_cards, CardView, GridCardView, NetworkCardView};
pub use html::{HtmlReporter, Mount, EMPTY_PLACEHOLDER};
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::AnomalyRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a record feed
    fn generate_report(
        &self,
        records: &[AnomalyRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a report to a writer
    fn write_report(
        &self,
        records: &[AnomalyRecord],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_report(records, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}
