use thiserror::Error;

/// Failure modes surfaced to the dashboard client.
///
/// Every variant is reported once to the caller; none of them abort the
/// process. `StorageCorrupt` is additionally recoverable: the log is reset
/// to empty and the service keeps running.
#[derive(Debug, Error)]
pub enum Error {
    /// The speech provider call failed or returned an error payload.
    /// The transcript is treated as empty downstream.
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),

    /// The structuring service call failed or returned invalid JSON.
    #[error("structuring failed: {0}")]
    StructuringFailed(String),

    /// The persisted conversation log could not be parsed.
    #[error("stored conversation log is corrupt: {0}")]
    StorageCorrupt(String),

    /// The client reported a microphone/device failure for the active
    /// capture session.
    #[error("capture device unavailable: {0}")]
    CaptureDeviceUnavailable(String),

    /// A capture session is already active; only one may run at a time.
    #[error("a recording is already in progress")]
    AlreadyRecording,

    /// Chunk or stop arrived with no active capture session.
    #[error("no recording is in progress")]
    NotRecording,

    /// Removal index points outside the conversation log.
    #[error("conversation index {index} out of range (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("storage I/O error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
