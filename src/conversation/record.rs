use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Storage key for the "Total Contacts" stat
pub const FIELD_SPEAKER_NAMES: &str = "Names of Speakers";

/// Storage key for the "Follow-ups" stat
pub const FIELD_FOLLOW_UPS: &str = "Things to Follow Up On";

/// Storage key for the "Opportunities" stat
pub const FIELD_OVERLAPS: &str = "Social or Business Overlaps";

/// One structured conversation as produced by the structuring service.
///
/// The known sequence fields drive the dashboard stat cards and default to
/// empty when absent; every other field the service returns is preserved
/// verbatim in `extra` and round-trips through serialization untouched.
/// `id` and `recorded_at` are stamped when a record without them is
/// deserialized, i.e. at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(rename = "recordedAt", default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,

    #[serde(
        rename = "Names of Speakers",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub speaker_names: Vec<String>,

    #[serde(
        rename = "Things to Follow Up On",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub follow_ups: Vec<String>,

    #[serde(
        rename = "Social or Business Overlaps",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub overlaps: Vec<String>,

    /// Uninterpreted fields, kept as the service sent them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ConversationRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            speaker_names: Vec::new(),
            follow_ups: Vec::new(),
            overlaps: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl ConversationRecord {
    /// Length of the sequence stored under `field`, 0 when the field is
    /// absent or not a sequence.
    pub fn sequence_len(&self, field: &str) -> usize {
        match field {
            FIELD_SPEAKER_NAMES => self.speaker_names.len(),
            FIELD_FOLLOW_UPS => self.follow_ups.len(),
            FIELD_OVERLAPS => self.overlaps.len(),
            other => self
                .extra
                .get(other)
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        }
    }
}
