//! Normalized anomaly record model.
//!
//! Regardless of where a record came from (network intrusion feed or
//! power-grid sensor feed), it is parsed into one of the two variants of
//! [`AnomalyRecord`] at the ingestion boundary. Downstream code matches on
//! the variant instead of re-inspecting record shape.

use serde::Serialize;

/// Severity threshold above which a network anomaly is critical.
pub const NETWORK_CRITICAL_THRESHOLD: f64 = 1.5;

/// Severity threshold above which a grid anomaly is critical.
///
/// Deliberately lower than the network threshold: grid readings escalate
/// earlier than traffic anomalies.
pub const GRID_CRITICAL_THRESHOLD: f64 = 1.0;

/// A single anomaly event, classified at parse time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnomalyRecord {
    /// Suspicious traffic between two network addresses.
    Network(NetworkAnomaly),
    /// Abnormal electrical readings at a sensor location.
    Grid(GridAnomaly),
}

impl AnomalyRecord {
    /// Numeric risk indicator for this record.
    pub fn severity_score(&self) -> f64 {
        match self {
            AnomalyRecord::Network(n) => n.severity_score,
            AnomalyRecord::Grid(g) => g.severity_score,
        }
    }

    /// Whether this record crosses its variant's critical threshold.
    ///
    /// The threshold differs by variant (1.5 for network, 1.0 for grid).
    pub fn is_critical(&self) -> bool {
        match self {
            AnomalyRecord::Network(n) => n.is_critical(),
            AnomalyRecord::Grid(g) => g.is_critical(),
        }
    }

    /// Timestamp string as supplied by the feed (`"N/A"` when absent).
    pub fn timestamp(&self) -> &str {
        match self {
            AnomalyRecord::Network(n) => &n.timestamp,
            AnomalyRecord::Grid(g) => &g.timestamp,
        }
    }
}

/// A network intrusion event.
///
/// All fields carry their documented defaults when the source record omitted
/// them; no field is optional after parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkAnomaly {
    pub source_ip: String,
    pub dest_ip: String,
    pub protocol: String,
    /// Always stored uppercase.
    pub attack_type: String,
    pub severity_score: f64,
    pub timestamp: String,
    pub packet_length: f64,
}

impl NetworkAnomaly {
    pub fn is_critical(&self) -> bool {
        self.severity_score > NETWORK_CRITICAL_THRESHOLD
    }
}

impl Default for NetworkAnomaly {
    fn default() -> Self {
        Self {
            source_ip: "Unknown".to_string(),
            dest_ip: "Unknown".to_string(),
            protocol: "TCP".to_string(),
            attack_type: "ANOMALY".to_string(),
            severity_score: 0.0,
            timestamp: "N/A".to_string(),
            packet_length: 0.0,
        }
    }
}

/// A power-grid sensor event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridAnomaly {
    pub sensor_id: String,
    pub zone: String,
    pub alert: String,
    pub severity_score: f64,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub timestamp: String,
}

impl GridAnomaly {
    pub fn is_critical(&self) -> bool {
        self.severity_score > GRID_CRITICAL_THRESHOLD
    }
}

impl Default for GridAnomaly {
    fn default() -> Self {
        Self {
            sensor_id: "N/A".to_string(),
            zone: "N/A".to_string(),
            alert: "ANOMALY".to_string(),
            severity_score: 0.0,
            voltage: 0.0,
            current: 0.0,
            power: 0.0,
            timestamp: "N/A".to_string(),
        }
    }
}
