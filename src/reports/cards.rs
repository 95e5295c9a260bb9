//! Card view models.
//!
//! Rendering happens in two passes: records are first projected into an
//! ordered list of fully-formatted card view models, then a reporter walks
//! that list once. All threshold branching and number formatting lives here;
//! the markup/serialization layers only interpolate.

use crate::model::AnomalyRecord;
use serde::Serialize;

/// Accent class for cards past their critical threshold.
pub const ACCENT_CRITICAL: &str = "alert-red";
/// Accent class for everything below the threshold.
pub const ACCENT_WARN: &str = "alert-amber";

/// Badge background class for the critical network action.
pub const ACTION_CRITICAL: &str = "dark-red";
/// Badge background class for the non-critical network action.
pub const ACTION_WARN: &str = "dark-amber";

/// One rendered card, in feed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView {
    Network(NetworkCardView),
    Grid(GridCardView),
}

impl CardView {
    /// Accent class driving the card's border color.
    pub fn accent(&self) -> &'static str {
        match self {
            CardView::Network(c) => c.accent,
            CardView::Grid(c) => c.accent,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.accent() == ACCENT_CRITICAL
    }
}

/// Presentation of a network intrusion record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkCardView {
    pub accent: &'static str,
    /// Action badge text: `BLOCK IP` when critical, `FLAGGED` otherwise.
    pub action_label: &'static str,
    /// Action badge background class.
    pub action_class: &'static str,
    pub source_ip: String,
    pub dest_ip: String,
    pub attack_type: String,
    pub protocol: String,
    /// Packet size in bytes, whole numbers without a trailing `.0`.
    pub packet_length: String,
    pub timestamp: String,
    pub severity: String,
}

/// Presentation of a grid sensor record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCardView {
    pub accent: &'static str,
    /// Status badge text: `CRITICAL` or `MODERATE`.
    pub status_label: &'static str,
    pub sensor_id: String,
    pub zone: String,
    pub alert: String,
    /// Fixed two decimals, e.g. `220.00`.
    pub voltage: String,
    pub current: String,
    pub power: String,
    pub timestamp: String,
    pub severity: String,
}

/// Project records into card view models, one per record, in input order.
pub fn build_cards(records: &[AnomalyRecord]) -> Vec<CardView> {
    records.iter().map(build_card).collect()
}

fn build_card(record: &AnomalyRecord) -> CardView {
    match record {
        AnomalyRecord::Network(net) => {
            let critical = net.is_critical();
            CardView::Network(NetworkCardView {
                accent: if critical { ACCENT_CRITICAL } else { ACCENT_WARN },
                action_label: if critical { "BLOCK IP" } else { "FLAGGED" },
                action_class: if critical { ACTION_CRITICAL } else { ACTION_WARN },
                source_ip: net.source_ip.clone(),
                dest_ip: net.dest_ip.clone(),
                attack_type: net.attack_type.clone(),
                protocol: net.protocol.clone(),
                packet_length: net.packet_length.to_string(),
                timestamp: net.timestamp.clone(),
                severity: net.severity_score.to_string(),
            })
        }
        AnomalyRecord::Grid(grid) => {
            let critical = grid.is_critical();
            CardView::Grid(GridCardView {
                accent: if critical { ACCENT_CRITICAL } else { ACCENT_WARN },
                status_label: if critical { "CRITICAL" } else { "MODERATE" },
                sensor_id: grid.sensor_id.clone(),
                zone: grid.zone.clone(),
                alert: grid.alert.clone(),
                voltage: format!("{:.2}", grid.voltage),
                current: format!("{:.2}", grid.current),
                power: format!("{:.2}", grid.power),
                timestamp: grid.timestamp.clone(),
                severity: grid.severity_score.to_string(),
            })
        }
    }
}
