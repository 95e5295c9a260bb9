//! HTML report generator.

use super::cards::{build_cards, CardView, GridCardView, NetworkCardView};
use super::escape::escape_html;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::AnomalyRecord;
use std::fmt::Write;

/// Placeholder shown when the feed is present but holds no records.
pub const EMPTY_PLACEHOLDER: &str = "No anomaly logs found in the database.";

/// A render target whose contents the renderer owns and overwrites wholesale.
///
/// Mirrors the mount point of the original dashboard page: every render call
/// fully replaces what was there before, so re-rendering is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mount {
    contents: String,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    /// The markup currently mounted.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS in full-page reports
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    pub fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Disable the inline stylesheet (markup only).
    #[must_use]
    pub fn no_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    /// Render the card markup for a record sequence.
    ///
    /// An empty sequence yields the single centered placeholder message and
    /// zero cards. Every record yields exactly one card, in input order.
    pub fn generate_fragment(&self, records: &[AnomalyRecord]) -> Result<String, ReportError> {
        let mut html = String::new();

        if records.is_empty() {
            writeln!(
                html,
                "<p class=\"placeholder\">{}</p>",
                escape_html(EMPTY_PLACEHOLDER)
            )?;
            return Ok(html);
        }

        for card in build_cards(records) {
            match card {
                CardView::Network(card) => write_network_card(&mut html, &card)?,
                CardView::Grid(card) => write_grid_card(&mut html, &card)?,
            }
        }

        Ok(html)
    }

    /// Render into a mount point, replacing its contents atomically.
    ///
    /// Both guards are silent no-ops: an absent record sequence (distinct
    /// from an empty one) leaves the mount unmodified, and an absent mount
    /// skips rendering entirely.
    pub fn render_into(
        &self,
        records: Option<&[AnomalyRecord]>,
        mount: Option<&mut Mount>,
    ) -> Result<(), ReportError> {
        let (Some(records), Some(mount)) = (records, mount) else {
            return Ok(());
        };
        mount.contents = self.generate_fragment(records)?;
        Ok(())
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #1e1e2e;
                --text-color: #cdd6f4;
                --accent-color: #89b4fa;
                --border-color: #45475a;
                --card-bg: #313244;
                --red: #f38ba8;
                --amber: #f9e2af;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.6;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
            }

            h1 {
                color: var(--accent-color);
            }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 20px;
                margin-bottom: 30px;
            }

            .cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                gap: 20px;
            }

            .anomaly-card {
                background-color: var(--card-bg);
                border-radius: 8px;
                padding: 20px;
                border: 1px solid var(--border-color);
                border-left-width: 5px;
            }

            .anomaly-card.alert-red { border-left-color: var(--red); }
            .anomaly-card.alert-amber { border-left-color: var(--amber); }

            .card-route, .card-sensor {
                font-size: 1.1em;
                font-weight: 600;
                margin-bottom: 6px;
            }

            .card-title {
                font-weight: bold;
                margin-bottom: 10px;
            }

            .alert-red .card-title { color: var(--red); }
            .alert-amber .card-title { color: var(--amber); }

            .card-field {
                font-size: 0.9em;
                color: #a6adc8;
            }

            .card-field .label {
                display: inline-block;
                min-width: 100px;
                font-weight: 500;
            }

            .badge {
                display: inline-block;
                margin-top: 12px;
                padding: 2px 10px;
                border-radius: 4px;
                font-size: 0.85em;
                font-weight: 600;
            }

            .badge.dark-red { background-color: #6e1423; color: #fecdd3; }
            .badge.dark-amber { background-color: #7a5901; color: #fde68a; }
            .badge.alert-red { background-color: rgba(243, 139, 168, 0.25); color: var(--red); }
            .badge.alert-amber { background-color: rgba(249, 226, 175, 0.25); color: var(--amber); }

            .placeholder {
                text-align: center;
                color: #a6adc8;
                padding: 40px 0;
            }

            .footer {
                margin-top: 40px;
                padding-top: 20px;
                border-top: 1px solid var(--border-color);
                font-size: 0.9em;
                color: #a6adc8;
            }
        </style>
        "#
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate_report(
        &self,
        records: &[AnomalyRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();

        let title = config
            .title
            .clone()
            .unwrap_or_else(|| "Anomaly Report".to_string());

        // HTML header
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(&title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        // Header
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(&title))?;
        if let Some(ref path) = config.metadata.source_path {
            writeln!(html, "    <p>Source: {}</p>", escape_html(path))?;
        }
        writeln!(
            html,
            "    <p>Generated by anomaly-view v{} on {}</p>",
            env!("CARGO_PKG_VERSION"),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(html, "</div>")?;

        // Cards
        writeln!(html, "<div class=\"cards\">")?;
        write!(html, "{}", self.generate_fragment(records)?)?;
        writeln!(html, "</div>")?;

        // Footer
        writeln!(html, "<div class=\"footer\">")?;
        writeln!(html, "    <p>{} record(s)</p>", records.len())?;
        writeln!(html, "</div>")?;

        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

fn write_network_card(html: &mut String, card: &NetworkCardView) -> Result<(), ReportError> {
    writeln!(html, "<div class=\"anomaly-card {}\">", card.accent)?;
    writeln!(
        html,
        "    <div class=\"card-route\">{} &rarr; {}</div>",
        escape_html(&card.source_ip),
        escape_html(&card.dest_ip)
    )?;
    writeln!(
        html,
        "    <div class=\"card-title\">&#9888; {}</div>",
        escape_html(&card.attack_type)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Protocol</span> {}</div>",
        escape_html(&card.protocol)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Packet size</span> {} bytes</div>",
        escape_html(&card.packet_length)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Timestamp</span> {}</div>",
        escape_html(&card.timestamp)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Severity</span> {}</div>",
        escape_html(&card.severity)
    )?;
    writeln!(
        html,
        "    <span class=\"badge {}\">{}</span>",
        card.action_class, card.action_label
    )?;
    writeln!(html, "</div>")?;
    Ok(())
}

fn write_grid_card(html: &mut String, card: &GridCardView) -> Result<(), ReportError> {
    writeln!(html, "<div class=\"anomaly-card {}\">", card.accent)?;
    writeln!(
        html,
        "    <div class=\"card-sensor\">Sensor {}</div>",
        escape_html(&card.sensor_id)
    )?;
    writeln!(
        html,
        "    <div class=\"card-title\">{}</div>",
        escape_html(&card.alert)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Zone</span> {}</div>",
        escape_html(&card.zone)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Voltage</span> {} V</div>",
        escape_html(&card.voltage)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Current</span> {} A</div>",
        escape_html(&card.current)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Power</span> {} kW</div>",
        escape_html(&card.power)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Timestamp</span> {}</div>",
        escape_html(&card.timestamp)
    )?;
    writeln!(
        html,
        "    <div class=\"card-field\"><span class=\"label\">Severity</span> {}</div>",
        escape_html(&card.severity)
    )?;
    writeln!(
        html,
        "    <span class=\"badge {}\">{}</span>",
        card.accent, card.status_label
    )?;
    writeln!(html, "</div>")?;
    Ok(())
}
