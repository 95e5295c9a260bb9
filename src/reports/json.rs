//! JSON report generator for programmatic integration.

use super::cards::{build_cards, CardView};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::AnomalyRecord;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter (pretty-printed by default)
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level JSON report document
#[derive(Serialize)]
struct JsonReport<'a> {
    tool_version: &'a str,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    record_count: usize,
    critical_count: usize,
    cards: Vec<CardView>,
}

impl ReportGenerator for JsonReporter {
    fn generate_report(
        &self,
        records: &[AnomalyRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let cards = build_cards(records);
        let report = JsonReport {
            tool_version: &config.metadata.tool_version,
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: config.metadata.source_path.as_deref(),
            record_count: cards.len(),
            critical_count: cards.iter().filter(|c| c.is_critical()).count(),
            cards,
        };

        let out = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        out.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
