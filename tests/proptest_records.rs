//! Property tests for record classification and card projection.

use anomaly_view::{
    model::{GridAnomaly, NetworkAnomaly},
    parsers::parse_records,
    reports::{build_cards, CardView, HtmlReporter},
    AnomalyRecord,
};
use proptest::prelude::*;
use serde_json::json;

fn record_strategy() -> impl Strategy<Value = AnomalyRecord> {
    let severity = -2.0f64..10.0f64;
    let label = "[a-zA-Z0-9 ._-]{0,12}";

    prop_oneof![
        (label, label, severity.clone()).prop_map(|(src, attack, severity_score)| {
            AnomalyRecord::Network(NetworkAnomaly {
                source_ip: src,
                attack_type: attack.to_uppercase(),
                severity_score,
                ..Default::default()
            })
        }),
        (label, severity).prop_map(|(sensor, severity_score)| {
            AnomalyRecord::Grid(GridAnomaly {
                sensor_id: sensor,
                severity_score,
                ..Default::default()
            })
        }),
    ]
}

proptest! {
    #[test]
    fn prop_one_card_per_record(records in prop::collection::vec(record_strategy(), 0..32)) {
        let cards = build_cards(&records);
        prop_assert_eq!(cards.len(), records.len());

        for (record, card) in records.iter().zip(&cards) {
            match (record, card) {
                (AnomalyRecord::Network(_), CardView::Network(_)) => {}
                (AnomalyRecord::Grid(_), CardView::Grid(_)) => {}
                _ => prop_assert!(false, "card variant does not match record variant"),
            }
            prop_assert_eq!(card.is_critical(), record.is_critical());
        }
    }

    #[test]
    fn prop_fragment_card_count(records in prop::collection::vec(record_strategy(), 1..16)) {
        let fragment = HtmlReporter::new().generate_fragment(&records).unwrap();
        let rendered = fragment.matches("<div class=\"anomaly-card").count();
        prop_assert_eq!(rendered, records.len());
    }

    #[test]
    fn prop_classification_is_total(severity in -5.0f64..5.0f64, has_source in any::<bool>()) {
        // any object classifies to exactly one variant, driven by key presence
        let raw = if has_source {
            json!([{"source_ip": null, "severity_score": severity}])
        } else {
            json!([{"severity_score": severity}])
        };
        let records = parse_records(&raw).unwrap();
        prop_assert_eq!(records.len(), 1);
        match &records[0] {
            AnomalyRecord::Network(_) => prop_assert!(has_source),
            AnomalyRecord::Grid(_) => prop_assert!(!has_source),
        }
    }
}
