use crate::error::{Error, Result};
use tracing::{info, warn};

/// In-memory accumulator for one audio capture session.
///
/// The dashboard records through the browser microphone and streams binary
/// chunks up as they arrive; they are held here until the user stops the
/// recording, at which point the chunks are concatenated into the single
/// payload handed to the transcription gateway. Exactly one session may be
/// active at a time, gated by the recording flag.
#[derive(Debug, Default)]
pub struct CaptureSession {
    recording: bool,
    chunks: Vec<Vec<u8>>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new capture session.
    pub fn start(&mut self) -> Result<()> {
        if self.recording {
            return Err(Error::AlreadyRecording);
        }

        self.recording = true;
        self.chunks.clear();
        info!("Capture session started");

        Ok(())
    }

    /// Append one binary audio chunk to the active session.
    pub fn push_chunk(&mut self, chunk: Vec<u8>) -> Result<()> {
        if !self.recording {
            return Err(Error::NotRecording);
        }

        self.chunks.push(chunk);
        Ok(())
    }

    /// Stop the active session and return the concatenated audio payload.
    pub fn stop(&mut self) -> Result<Vec<u8>> {
        if !self.recording {
            return Err(Error::NotRecording);
        }

        self.recording = false;
        let total: usize = self.chunks.iter().map(|c| c.len()).sum();
        let mut audio = Vec::with_capacity(total);
        for chunk in self.chunks.drain(..) {
            audio.extend_from_slice(&chunk);
        }

        info!("Capture session stopped: {} bytes", audio.len());

        Ok(audio)
    }

    /// Reset after a client-side capture failure (microphone permission
    /// denied or device error). Discards any accumulated chunks.
    pub fn abort(&mut self, reason: &str) {
        let err = Error::CaptureDeviceUnavailable(reason.to_string());
        warn!("{}", err);

        self.recording = false;
        self.chunks.clear();
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }
}
