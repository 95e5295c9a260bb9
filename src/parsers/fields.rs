//! Ordered-defaults field resolution.
//!
//! Anomaly feeds are loosely shaped: fields go missing, appear under
//! alternate names, or arrive as the wrong JSON type. Each resolver walks an
//! ordered list of candidate locations and takes the first present, non-null
//! value. Presence wins even for zero or empty values, so a legitimate `0.0`
//! voltage reading stays `0.0` instead of falling through to the next
//! candidate.

use serde_json::Value;

/// Resolve a string field from the first candidate key that holds a usable
/// value. JSON numbers are rendered with their display form (sensor ids
/// arrive as integers in some feeds).
pub(crate) fn string_field(record: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find_map(coerce_string)
        .unwrap_or_else(|| default.to_string())
}

/// Resolve a numeric field from the first present, non-null candidate key.
pub(crate) fn number_field(record: &Value, keys: &[&str], default: f64) -> f64 {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find(|v| !v.is_null())
        .map_or(default, coerce_number)
}

/// Resolve a grid metric: the flat field wins, then the nested
/// `metrics.<name>.actual` reading, then zero.
pub(crate) fn metric_field(record: &Value, name: &str) -> f64 {
    if let Some(flat) = record.get(name).filter(|v| !v.is_null()) {
        return coerce_number(flat);
    }
    record
        .pointer(&format!("/metrics/{name}/actual"))
        .filter(|v| !v.is_null())
        .map_or(0.0, coerce_number)
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric coercion at ingestion time. Unparseable values become `NaN`
/// rather than erroring; the renderer prints them as the literal `NaN`.
fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_field_first_present_wins() {
        let rec = json!({"sensor": "S-12", "sensor_id": "S-99"});
        assert_eq!(string_field(&rec, &["sensor", "sensor_id"], "N/A"), "S-12");

        let rec = json!({"sensor_id": "S-99"});
        assert_eq!(string_field(&rec, &["sensor", "sensor_id"], "N/A"), "S-99");

        let rec = json!({});
        assert_eq!(string_field(&rec, &["sensor", "sensor_id"], "N/A"), "N/A");
    }

    #[test]
    fn test_string_field_numeric_sensor_id() {
        let rec = json!({"sensor_id": 42});
        assert_eq!(string_field(&rec, &["sensor", "sensor_id"], "N/A"), "42");
    }

    #[test]
    fn test_string_field_null_falls_through() {
        let rec = json!({"sensor": null, "sensor_id": "S-7"});
        assert_eq!(string_field(&rec, &["sensor", "sensor_id"], "N/A"), "S-7");
    }

    #[test]
    fn test_string_field_empty_string_is_kept() {
        // present-but-empty is a value, not an absence
        let rec = json!({"zone": "", "location": "north"});
        assert_eq!(string_field(&rec, &["zone", "location"], "N/A"), "");
    }

    #[test]
    fn test_number_field_zero_is_kept() {
        let rec = json!({"severity_score": 0});
        assert_eq!(number_field(&rec, &["severity_score"], 9.9), 0.0);
    }

    #[test]
    fn test_number_field_string_coercion() {
        let rec = json!({"packet_length": "1500"});
        assert_eq!(number_field(&rec, &["packet_length"], 0.0), 1500.0);

        let rec = json!({"packet_length": "many"});
        assert!(number_field(&rec, &["packet_length"], 0.0).is_nan());
    }

    #[test]
    fn test_metric_field_flat_wins_over_nested() {
        let rec = json!({
            "voltage": 220.0,
            "metrics": {"voltage": {"actual": 110.0}}
        });
        assert_eq!(metric_field(&rec, "voltage"), 220.0);
    }

    #[test]
    fn test_metric_field_nested_fallback() {
        let rec = json!({"metrics": {"voltage": {"actual": 110.5}}});
        assert_eq!(metric_field(&rec, "voltage"), 110.5);
    }

    #[test]
    fn test_metric_field_flat_zero_is_kept() {
        // a legitimate 0.0 reading must not fall through to the nested value
        let rec = json!({
            "voltage": 0.0,
            "metrics": {"voltage": {"actual": 110.0}}
        });
        assert_eq!(metric_field(&rec, "voltage"), 0.0);
    }

    #[test]
    fn test_metric_field_default() {
        let rec = json!({"sensor": "S-1"});
        assert_eq!(metric_field(&rec, "power"), 0.0);
    }
}
