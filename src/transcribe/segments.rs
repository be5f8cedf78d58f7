use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single recognized word with speaker attribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Display text (punctuated form when the provider supplies one)
    pub text: String,

    /// Start offset in seconds from the beginning of the audio
    pub start_time: f64,

    /// End offset in seconds
    pub end_time: f64,

    /// Zero-based speaker identity assigned by diarization
    pub speaker_id: u32,
}

/// A contiguous run of words attributed to the same speaker, merged into
/// one display unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    #[serde(rename = "speaker")]
    pub speaker_id: u32,

    /// Space-joined word texts
    pub text: String,

    #[serde(rename = "start")]
    pub start_time: f64,

    #[serde(rename = "end")]
    pub end_time: f64,
}

/// The display-ready outcome of one transcription call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    #[serde(rename = "transcript")]
    pub full_text: String,

    #[serde(rename = "speakerSegments")]
    pub segments: Vec<SpeakerSegment>,

    /// Speaker count as reported by provider metadata (0 when absent).
    /// This is the source of truth even if it disagrees with the segments.
    #[serde(rename = "totalSpeakers")]
    pub speaker_count: u32,
}

impl TranscriptionResult {
    /// Assemble a result from the word stream and provider metadata.
    ///
    /// The metadata speaker count is kept verbatim; a mismatch against the
    /// diarized words is logged as a possible provider inconsistency, not
    /// corrected.
    pub fn new(full_text: String, words: &[Word], speaker_count: u32) -> Self {
        let segments = group_by_speaker(words);

        let derived = words
            .iter()
            .map(|w| w.speaker_id + 1)
            .max()
            .unwrap_or(0);
        if speaker_count != derived {
            warn!(
                "provider speaker count {} disagrees with {} derived from words",
                speaker_count, derived
            );
        }

        Self {
            full_text,
            segments,
            speaker_count,
        }
    }
}

/// Group an ordered word sequence into per-speaker segments.
///
/// Single linear pass: consecutive words with the same `speaker_id` are
/// merged into one segment whose text is the space-joined word texts and
/// whose span runs from the first word's start to the last word's end. A
/// speaker change closes the open segment and starts a new one. Segments
/// with empty text are never emitted.
pub fn group_by_speaker(words: &[Word]) -> Vec<SpeakerSegment> {
    let mut segments = Vec::new();
    let mut current: Option<SpeakerSegment> = None;

    for word in words {
        match current.as_mut() {
            Some(seg) if seg.speaker_id == word.speaker_id => {
                seg.text.push(' ');
                seg.text.push_str(&word.text);
                seg.end_time = word.end_time;
            }
            _ => {
                if let Some(seg) = current.take() {
                    if !seg.text.is_empty() {
                        segments.push(seg);
                    }
                }
                current = Some(SpeakerSegment {
                    speaker_id: word.speaker_id,
                    text: word.text.clone(),
                    start_time: word.start_time,
                    end_time: word.end_time,
                });
            }
        }
    }

    if let Some(seg) = current {
        if !seg.text.is_empty() {
            segments.push(seg);
        }
    }

    segments
}
