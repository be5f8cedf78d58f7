use super::record::{ConversationRecord, FIELD_FOLLOW_UPS, FIELD_OVERLAPS, FIELD_SPEAKER_NAMES};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered log of structured conversations.
///
/// Append-only except for explicit user-initiated removal by index.
/// Serializes as a plain JSON array, which is exactly the shape persisted
/// by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    records: Vec<ConversationRecord>,
}

/// The three stat-card numbers the dashboard renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    #[serde(rename = "totalContacts")]
    pub total_contacts: usize,

    #[serde(rename = "followUps")]
    pub follow_ups: usize,

    #[serde(rename = "opportunities")]
    pub opportunities: usize,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ConversationRecord] {
        &self.records
    }

    /// Append a record to the end of the log.
    pub fn append(&mut self, record: ConversationRecord) {
        self.records.push(record);
    }

    /// Remove the record at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<ConversationRecord> {
        if index >= self.records.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        Ok(self.records.remove(index))
    }

    /// Sum of sequence lengths under `field` across all records; records
    /// missing the field contribute 0.
    pub fn aggregate(&self, field: &str) -> usize {
        self.records.iter().map(|r| r.sequence_len(field)).sum()
    }

    pub fn counts(&self) -> DashboardCounts {
        DashboardCounts {
            total_contacts: self.aggregate(FIELD_SPEAKER_NAMES),
            follow_ups: self.aggregate(FIELD_FOLLOW_UPS),
            opportunities: self.aggregate(FIELD_OVERLAPS),
        }
    }
}
