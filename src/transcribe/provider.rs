use super::segments::{TranscriptionResult, Word};
use super::AUDIO_MIME;
use crate::config::DeepgramConfig;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// Provider request timeout
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for the Deepgram prerecorded listen API.
///
/// Stateless across calls: each invocation forwards one finite audio
/// payload with fixed recognition parameters (punctuation and diarization
/// on, `audio/webm` content type) and reshapes the word-level response
/// into speaker segments.
pub struct DeepgramClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    language: String,
}

impl DeepgramClient {
    pub fn new(config: &DeepgramConfig, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::TranscriptionFailed(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            language: config.language.clone(),
        })
    }

    /// Transcribe one audio payload.
    ///
    /// Any transport failure, non-success status, or malformed response
    /// maps to [`Error::TranscriptionFailed`]; no transcript is surfaced.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<TranscriptionResult> {
        info!("Sending {} bytes of audio to Deepgram", audio.len());

        let response = self
            .http
            .post(&self.api_url)
            .query(&[
                ("model", self.model.as_str()),
                ("punctuate", "true"),
                ("language", self.language.as_str()),
                ("diarize", "true"),
            ])
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", AUDIO_MIME)
            .body(audio)
            .send()
            .await
            .map_err(|e| Error::TranscriptionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::TranscriptionFailed(format!(
                "provider returned {status}: {body}"
            )));
        }

        let listen: ListenResponse = response
            .json()
            .await
            .map_err(|e| Error::TranscriptionFailed(format!("invalid provider response: {e}")))?;

        listen.into_result()
    }
}

// ============================================================================
// Deepgram wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListenResponse {
    #[serde(default)]
    metadata: ListenMetadata,
    results: ListenResults,
}

#[derive(Debug, Default, Deserialize)]
struct ListenMetadata {
    #[serde(default)]
    speakers: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ListenResults {
    channels: Vec<ListenChannel>,
}

#[derive(Debug, Deserialize)]
struct ListenChannel {
    alternatives: Vec<ListenAlternative>,
}

#[derive(Debug, Deserialize)]
struct ListenAlternative {
    transcript: String,
    #[serde(default)]
    words: Vec<ListenWord>,
}

#[derive(Debug, Deserialize)]
struct ListenWord {
    word: String,
    start: f64,
    end: f64,
    #[serde(default)]
    punctuated_word: Option<String>,
    #[serde(default)]
    speaker: Option<u32>,
}

impl ListenResponse {
    fn into_result(self) -> Result<TranscriptionResult> {
        // Single-channel audio: first channel, best alternative
        let alternative = self
            .results
            .channels
            .into_iter()
            .next()
            .and_then(|c| c.alternatives.into_iter().next())
            .ok_or_else(|| {
                Error::TranscriptionFailed("provider response contained no transcript".to_string())
            })?;

        let words: Vec<Word> = alternative
            .words
            .into_iter()
            .map(|w| Word {
                // Prefer the punctuated display form over the raw token
                text: w.punctuated_word.unwrap_or(w.word),
                start_time: w.start,
                end_time: w.end,
                speaker_id: w.speaker.unwrap_or(0),
            })
            .collect();

        Ok(TranscriptionResult::new(
            alternative.transcript,
            &words,
            self.metadata.speakers.unwrap_or(0),
        ))
    }
}
