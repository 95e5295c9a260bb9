//! Compact shell-friendly summary output.

use super::cards::{build_cards, CardView};
use super::html::EMPTY_PLACEHOLDER;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::AnomalyRecord;
use std::fmt::Write;

const RED: &str = "\x1b[31;1m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Summary report generator for terminal output
pub struct SummaryReporter {
    use_color: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter (colored by default)
    pub fn new() -> Self {
        Self { use_color: true }
    }

    /// Disable ANSI color codes.
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        records: &[AnomalyRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        let title = config.title.as_deref().unwrap_or("Anomaly Report");
        writeln!(out, "{}", self.paint(BOLD, title))?;

        if records.is_empty() {
            writeln!(out, "  {EMPTY_PLACEHOLDER}")?;
            return Ok(out);
        }

        let cards = build_cards(records);
        let network = cards
            .iter()
            .filter(|c| matches!(c, CardView::Network(_)))
            .count();
        let critical = cards.iter().filter(|c| c.is_critical()).count();
        writeln!(
            out,
            "  {} record(s): {} network, {} grid ({} critical)",
            cards.len(),
            network,
            cards.len() - network,
            critical
        )?;
        writeln!(out)?;

        for card in &cards {
            match card {
                CardView::Network(c) => {
                    let label_color = if card.is_critical() { RED } else { YELLOW };
                    writeln!(
                        out,
                        "  [{}] {} {} -> {} proto={} severity={}",
                        self.paint(label_color, c.action_label),
                        c.attack_type,
                        c.source_ip,
                        c.dest_ip,
                        c.protocol,
                        c.severity
                    )?;
                }
                CardView::Grid(c) => {
                    let label_color = if card.is_critical() { RED } else { YELLOW };
                    writeln!(
                        out,
                        "  [{}] {} sensor={} zone={} {} V / {} A / {} kW severity={}",
                        self.paint(label_color, c.status_label),
                        c.alert,
                        c.sensor_id,
                        c.zone,
                        c.voltage,
                        c.current,
                        c.power,
                        c.severity
                    )?;
                }
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
