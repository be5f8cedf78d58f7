pub mod capture;
pub mod config;
pub mod conversation;
pub mod error;
pub mod http;
pub mod structuring;
pub mod transcribe;

pub use capture::CaptureSession;
pub use config::Config;
pub use conversation::{
    ConversationLog, ConversationRecord, DashboardCounts, JsonFileStore, LogStore,
};
pub use error::Error;
pub use http::{create_router, AppState};
pub use structuring::StructuringClient;
pub use transcribe::{
    group_by_speaker, DeepgramClient, SpeakerSegment, TranscriptionResult, Word,
};
