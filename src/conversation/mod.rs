//! Dashboard state container
//!
//! Holds the append-only conversation log, computes the derived aggregate
//! counts, and persists the log through a pluggable store:
//! - `record` - structured conversation schema (known fields + overflow)
//! - `log` - the ordered log and its aggregates
//! - `store` - persistence backend trait and the file-backed default

mod log;
mod record;
mod store;

pub use log::{ConversationLog, DashboardCounts};
pub use record::{
    ConversationRecord, FIELD_FOLLOW_UPS, FIELD_OVERLAPS, FIELD_SPEAKER_NAMES,
};
pub use store::{JsonFileStore, LogStore};
