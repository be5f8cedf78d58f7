use crate::conversation::ConversationRecord;
use crate::error::{Error, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Serialize)]
struct StructuringRequest<'a> {
    transcript: &'a str,
}

/// Client for the external service that turns a flat transcript into a
/// structured conversation record (speaker names, follow-ups, overlaps).
///
/// The response shape is up to the service; whatever it returns is
/// validated against the known-field schema and appended to the log with
/// unknown fields preserved.
pub struct StructuringClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StructuringClient {
    pub fn new(endpoint: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::StructuringFailed(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// Extract a structured record from a transcript.
    ///
    /// Transport failures, non-success statuses, and responses that fail
    /// schema validation all map to [`Error::StructuringFailed`].
    pub async fn extract(&self, transcript: &str) -> Result<ConversationRecord> {
        info!("Structuring transcript ({} chars)", transcript.len());

        let response = self
            .http
            .post(&self.endpoint)
            .json(&StructuringRequest { transcript })
            .send()
            .await
            .map_err(|e| Error::StructuringFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::StructuringFailed(format!(
                "service returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::StructuringFailed(format!("invalid service response: {e}")))
    }
}
