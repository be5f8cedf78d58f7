//! Transcription gateway
//!
//! Accepts a finite binary audio payload, obtains a diarized word-level
//! transcript from the speech provider, and reshapes it into speaker
//! segments for display:
//! - `provider` - Deepgram prerecorded API client
//! - `segments` - speaker-segment grouping transform

mod provider;
mod segments;

pub use provider::DeepgramClient;
pub use segments::{group_by_speaker, SpeakerSegment, TranscriptionResult, Word};

/// The single supported audio encoding for incoming captures.
pub const AUDIO_MIME: &str = "audio/webm";
