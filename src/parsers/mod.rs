//! Record ingestion.
//!
//! Classification between the two record variants happens exactly once,
//! here, when raw JSON enters the system. Missing or malformed fields fall
//! back to documented defaults; a record can never fail to parse, only a
//! document can (invalid JSON, or a top-level value that is not an array).

mod fields;

use crate::error::{AnomalyViewError, ParseErrorKind, Result};
use crate::model::{AnomalyRecord, GridAnomaly, NetworkAnomaly};
use fields::{metric_field, number_field, string_field};
use serde_json::Value;

/// The two record shapes a feed can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Network,
    Grid,
}

/// Classify a raw record.
///
/// A record is a network anomaly iff it carries a `source_ip` key — the key's
/// value is irrelevant, null included. Everything else is a grid anomaly.
pub fn classify(record: &Value) -> RecordKind {
    match record.as_object() {
        Some(obj) if obj.contains_key("source_ip") => RecordKind::Network,
        _ => RecordKind::Grid,
    }
}

impl AnomalyRecord {
    /// Build a record from raw JSON, substituting defaults for anything
    /// missing. Infallible: a non-object value yields an all-defaults grid
    /// record.
    pub fn from_value(record: &Value) -> AnomalyRecord {
        match classify(record) {
            RecordKind::Network => AnomalyRecord::Network(parse_network(record)),
            RecordKind::Grid => AnomalyRecord::Grid(parse_grid(record)),
        }
    }
}

fn parse_network(record: &Value) -> NetworkAnomaly {
    NetworkAnomaly {
        source_ip: string_field(record, &["source_ip"], "Unknown"),
        dest_ip: string_field(record, &["dest_ip"], "Unknown"),
        protocol: string_field(record, &["protocol"], "TCP"),
        attack_type: string_field(record, &["attack_type"], "ANOMALY").to_uppercase(),
        severity_score: number_field(record, &["severity_score"], 0.0),
        timestamp: string_field(record, &["timestamp"], "N/A"),
        packet_length: number_field(record, &["packet_length"], 0.0),
    }
}

fn parse_grid(record: &Value) -> GridAnomaly {
    GridAnomaly {
        sensor_id: string_field(record, &["sensor", "sensor_id"], "N/A"),
        zone: string_field(record, &["zone", "location"], "N/A"),
        alert: string_field(record, &["alert"], "ANOMALY"),
        severity_score: number_field(record, &["severity_score"], 0.0),
        voltage: metric_field(record, "voltage"),
        current: metric_field(record, "current"),
        power: metric_field(record, "power"),
        timestamp: string_field(record, &["timestamp"], "N/A"),
    }
}

/// Parse an already-deserialized JSON document into records, preserving
/// input order.
pub fn parse_records(value: &Value) -> Result<Vec<AnomalyRecord>> {
    match value {
        Value::Array(items) => Ok(items.iter().map(AnomalyRecord::from_value).collect()),
        other => Err(AnomalyViewError::parse(
            "top-level document",
            ParseErrorKind::NotAnArray {
                found: json_type_name(other),
            },
        )),
    }
}

/// Parse a JSON document from text.
pub fn parse_records_str(content: &str) -> Result<Vec<AnomalyRecord>> {
    let value: Value = serde_json::from_str(content)?;
    parse_records(&value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_on_key_presence() {
        assert_eq!(
            classify(&json!({"source_ip": "10.0.0.1"})),
            RecordKind::Network
        );
        // even a null source_ip marks a network record
        assert_eq!(classify(&json!({"source_ip": null})), RecordKind::Network);
        assert_eq!(classify(&json!({"sensor": "S-1"})), RecordKind::Grid);
        assert_eq!(classify(&json!(42)), RecordKind::Grid);
    }

    #[test]
    fn test_parse_network_record() {
        let rec = AnomalyRecord::from_value(&json!({
            "source_ip": "10.0.0.1",
            "dest_ip": "10.0.0.5",
            "protocol": "UDP",
            "attack_type": "ddos",
            "severity_score": 2.1,
            "timestamp": "2026-08-01 12:00:00",
            "packet_length": 1500
        }));
        let AnomalyRecord::Network(net) = rec else {
            panic!("expected network record");
        };
        assert_eq!(net.source_ip, "10.0.0.1");
        assert_eq!(net.attack_type, "DDOS");
        assert_eq!(net.packet_length, 1500.0);
        assert!(net.is_critical());
    }

    #[test]
    fn test_parse_network_defaults() {
        let rec = AnomalyRecord::from_value(&json!({"source_ip": null}));
        let AnomalyRecord::Network(net) = rec else {
            panic!("expected network record");
        };
        assert_eq!(net.source_ip, "Unknown");
        assert_eq!(net.dest_ip, "Unknown");
        assert_eq!(net.protocol, "TCP");
        assert_eq!(net.attack_type, "ANOMALY");
        assert_eq!(net.severity_score, 0.0);
        assert_eq!(net.timestamp, "N/A");
    }

    #[test]
    fn test_parse_grid_record_with_nested_metrics() {
        let rec = AnomalyRecord::from_value(&json!({
            "sensor_id": 7,
            "location": "west",
            "alert": "Voltage Sag",
            "severity_score": 0.8,
            "metrics": {
                "voltage": {"actual": 198.4, "expected": 230.0},
                "current": {"actual": 12.1},
                "power": {"actual": 2.4}
            }
        }));
        let AnomalyRecord::Grid(grid) = rec else {
            panic!("expected grid record");
        };
        assert_eq!(grid.sensor_id, "7");
        assert_eq!(grid.zone, "west");
        assert_eq!(grid.alert, "Voltage Sag");
        assert_eq!(grid.voltage, 198.4);
        assert_eq!(grid.current, 12.1);
        assert_eq!(grid.power, 2.4);
        assert!(!grid.is_critical());
    }

    #[test]
    fn test_parse_grid_non_object() {
        let rec = AnomalyRecord::from_value(&json!("garbage"));
        assert_eq!(rec, AnomalyRecord::Grid(Default::default()));
    }

    #[test]
    fn test_parse_records_preserves_order() {
        let records = parse_records(&json!([
            {"source_ip": "10.0.0.1"},
            {"sensor": "S-1"},
            {"source_ip": "10.0.0.2"}
        ]))
        .unwrap();
        assert_eq!(records.len(), 3);
        assert!(matches!(records[0], AnomalyRecord::Network(_)));
        assert!(matches!(records[1], AnomalyRecord::Grid(_)));
        assert!(matches!(records[2], AnomalyRecord::Network(_)));
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        let err = parse_records(&json!({"records": []})).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_parse_records_str_invalid_json() {
        assert!(parse_records_str("not json").is_err());
    }

    #[test]
    fn test_parse_records_str_empty_array() {
        assert_eq!(parse_records_str("[]").unwrap().len(), 0);
    }
}
