//! Wire shape decoding
#![cfg(feature = "serde")]
use planefix::prelude::*;

#[test]
fn full_reference_message() {
    let report: RawReport = serde_json::from_str(
        r#"{ "id": "sat-1", "x": 12.0, "y": 3.5, "sentAt": 1000.0, "receivedAt": 1000.04 }"#,
    )
    .unwrap();
    assert_eq!(report.id, "sat-1");
    assert_eq!(report.x, Some(12.0));
    assert_eq!(report.y, Some(3.5));
    assert_eq!(report.sent_at, Some(1000.0));
    assert_eq!(report.received_at, Some(1000.04));
}

#[test]
fn null_and_missing_fields_decode_to_none() {
    let report: RawReport =
        serde_json::from_str(r#"{ "id": "object", "x": null, "y": 7.0 }"#).unwrap();
    assert_eq!(report.x, None);
    assert_eq!(report.y, Some(7.0));
    assert_eq!(report.sent_at, None);
    assert_eq!(report.received_at, None);
}

#[test]
fn decoded_message_drives_the_engine() {
    let mut engine = Engine::new(Config::default());
    let now = Epoch::from_gregorian_utc_at_midnight(2025, 1, 1);

    let report: RawReport =
        serde_json::from_str(r#"{ "id": "object", "x": 2.0, "y": 3.0 }"#).unwrap();

    match engine.on_report(&report, now) {
        Some(PositionUpdate::Fix(estimate)) => {
            assert_eq!(estimate.provenance, Provenance::DirectOverride);
            assert_eq!(estimate.position, Vector2::new(2.0, 3.0));
        },
        other => panic!("published {:?}", other),
    }
}

#[test]
fn published_estimate_serializes() {
    let mut engine = Engine::new(Config::default());
    let now = Epoch::from_gregorian_utc_at_midnight(2025, 1, 1);

    let update = engine
        .on_report(&RawReport::position_only("object", 1.0, 2.0), now)
        .unwrap();
    if let PositionUpdate::Fix(estimate) = update {
        let json = serde_json::to_string(&estimate).unwrap();
        assert!(json.contains("\"DirectOverride\""));
    } else {
        panic!("expected a fix");
    }
}
