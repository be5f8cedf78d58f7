// Tests for the conversation log: aggregates, removal, and the
// known-field-plus-overflow record schema.

use anyhow::Result;
use serde_json::json;
use warmly::conversation::{
    ConversationLog, ConversationRecord, FIELD_FOLLOW_UPS, FIELD_OVERLAPS, FIELD_SPEAKER_NAMES,
};
use warmly::Error;

fn record_with(names: &[&str], follow_ups: &[&str], overlaps: &[&str]) -> ConversationRecord {
    ConversationRecord {
        speaker_names: names.iter().map(|s| s.to_string()).collect(),
        follow_ups: follow_ups.iter().map(|s| s.to_string()).collect(),
        overlaps: overlaps.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_aggregate_over_empty_log_is_zero() {
    let log = ConversationLog::new();

    assert_eq!(log.aggregate(FIELD_SPEAKER_NAMES), 0);
    assert_eq!(log.aggregate(FIELD_FOLLOW_UPS), 0);
    assert_eq!(log.aggregate(FIELD_OVERLAPS), 0);
}

#[test]
fn test_aggregate_treats_missing_fields_as_zero() {
    let mut log = ConversationLog::new();
    for _ in 0..3 {
        log.append(ConversationRecord::default());
    }

    assert_eq!(log.len(), 3);
    assert_eq!(log.aggregate(FIELD_FOLLOW_UPS), 0);
}

#[test]
fn test_aggregate_sums_sequence_lengths() {
    let mut log = ConversationLog::new();
    log.append(record_with(&["Sarah Chen"], &[], &[]));
    log.append(record_with(&["Marcus Rodriguez", "Emily Watson"], &[], &[]));
    log.append(record_with(&["Priya Patel", "Tom Okafor", "Lena Fischer"], &[], &[]));

    assert_eq!(log.aggregate(FIELD_SPEAKER_NAMES), 6);
}

#[test]
fn test_aggregate_follow_ups_example() -> Result<()> {
    // One record with a single follow-up, one empty record
    let with_follow_up: ConversationRecord =
        serde_json::from_value(json!({ "Things to Follow Up On": ["call Bob"] }))?;
    let empty: ConversationRecord = serde_json::from_value(json!({}))?;

    let mut log = ConversationLog::new();
    log.append(with_follow_up);
    log.append(empty);

    assert_eq!(log.aggregate(FIELD_FOLLOW_UPS), 1);

    Ok(())
}

#[test]
fn test_aggregate_unknown_field_reads_overflow() -> Result<()> {
    let record: ConversationRecord = serde_json::from_value(json!({
        "Names of Speakers": ["Sarah Chen"],
        "Shared Interests": ["machine learning", "hiking"]
    }))?;

    let mut log = ConversationLog::new();
    log.append(record);

    assert_eq!(log.aggregate("Shared Interests"), 2);
    assert_eq!(log.aggregate("Not A Field"), 0);

    Ok(())
}

#[test]
fn test_counts_map_to_dashboard_fields() {
    let mut log = ConversationLog::new();
    log.append(record_with(
        &["Sarah Chen", "Marcus Rodriguez"],
        &["send portfolio"],
        &["AI integration", "Series A intro", "conference talk"],
    ));

    let counts = log.counts();

    assert_eq!(counts.total_contacts, 2);
    assert_eq!(counts.follow_ups, 1);
    assert_eq!(counts.opportunities, 3);
}

#[test]
fn test_remove_preserves_order_of_rest() -> Result<()> {
    let mut log = ConversationLog::new();
    log.append(record_with(&["first"], &[], &[]));
    log.append(record_with(&["second"], &[], &[]));
    log.append(record_with(&["third"], &[], &[]));

    let removed = log.remove(1)?;

    assert_eq!(removed.speaker_names, vec!["second"]);
    assert_eq!(log.len(), 2);
    assert_eq!(log.records()[0].speaker_names, vec!["first"]);
    assert_eq!(log.records()[1].speaker_names, vec!["third"]);

    Ok(())
}

#[test]
fn test_remove_out_of_range_is_an_error() {
    let mut log = ConversationLog::new();
    log.append(ConversationRecord::default());

    let err = log.remove(5).unwrap_err();

    match err {
        Error::IndexOutOfRange { index, len } => {
            assert_eq!(index, 5);
            assert_eq!(len, 1);
        }
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }

    // The failed removal must not have mutated the log
    assert_eq!(log.len(), 1);
}

#[test]
fn test_record_round_trip_preserves_unknown_fields() -> Result<()> {
    let original = json!({
        "Names of Speakers": ["Sarah Chen"],
        "Things to Follow Up On": ["send AI portfolio"],
        "Company": "TechFlow Inc",
        "Key Points": { "primary": "looking for partners", "count": 3 }
    });

    let record: ConversationRecord = serde_json::from_value(original)?;
    let reserialized = serde_json::to_value(&record)?;

    assert_eq!(reserialized["Company"], "TechFlow Inc");
    assert_eq!(reserialized["Key Points"]["count"], 3);
    assert_eq!(reserialized["Names of Speakers"][0], "Sarah Chen");

    Ok(())
}

#[test]
fn test_log_round_trip_yields_equal_log() -> Result<()> {
    let mut log = ConversationLog::new();
    log.append(record_with(&["Sarah Chen"], &["call back"], &[]));
    log.append(record_with(&[], &[], &["biotech collab"]));

    let json = serde_json::to_string(&log)?;
    let restored: ConversationLog = serde_json::from_str(&json)?;

    assert_eq!(restored, log);

    Ok(())
}

#[test]
fn test_log_serializes_as_plain_array() -> Result<()> {
    let mut log = ConversationLog::new();
    log.append(ConversationRecord::default());

    let value = serde_json::to_value(&log)?;

    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 1);

    Ok(())
}
