use super::state::AppState;
use crate::conversation::ConversationRecord;
use crate::transcribe::{TranscriptionResult, AUDIO_MIME};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CaptureResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub status: String,
    pub received: usize,
}

#[derive(Debug, Serialize)]
pub struct CaptureStatusResponse {
    pub recording: bool,
}

#[derive(Debug, Deserialize)]
pub struct AbortCaptureRequest {
    /// Device failure as reported by the browser (permission denial etc.)
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct StopCaptureResponse {
    /// The structured record appended to the log, when a structuring
    /// endpoint is configured
    pub record: Option<ConversationRecord>,

    pub transcription: TranscriptionResult,
}

// ============================================================================
// Transcription gateway
// ============================================================================

/// POST /api/transcribe
/// Body is raw audio bytes; responds with the transcript, its speaker
/// segments, and the provider-reported speaker count
pub async fn transcribe_audio(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    info!("Received audio payload of {} bytes", body.len());

    match state.transcriber.transcribe(body.to_vec()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("Transcription failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to transcribe audio".to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Capture control
// ============================================================================

/// POST /api/recordings/start
/// Open the capture session; 409 when one is already active
pub async fn start_capture(State(state): State<AppState>) -> impl IntoResponse {
    let mut capture = state.capture.write().await;

    match capture.start() {
        Ok(()) => (
            StatusCode::OK,
            Json(CaptureResponse {
                status: "recording".to_string(),
                message: "Recording started".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /api/recordings/chunks
/// Append one binary audio chunk to the open capture
pub async fn push_chunk(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let mut capture = state.capture.write().await;

    match capture.push_chunk(body.to_vec()) {
        Ok(()) => (
            StatusCode::OK,
            Json(ChunkResponse {
                status: "recording".to_string(),
                received: body.len(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /api/recordings/stop
/// Close the capture, transcribe it, run structuring when configured, and
/// append the structured record to the conversation log.
///
/// The capture guard is held across the transcription await, so a second
/// recording cannot start while a transcription is in flight.
pub async fn stop_capture(State(state): State<AppState>) -> impl IntoResponse {
    let mut capture = state.capture.write().await;

    let audio = match capture.stop() {
        Ok(audio) => audio,
        Err(e) => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    if let Err(e) = state.store.save_last_capture(&audio).await {
        warn!("Failed to persist capture audio: {}", e);
    }

    let transcription = match state.transcriber.transcribe(audio).await {
        Ok(result) => result,
        Err(e) => {
            error!("Transcription failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to transcribe audio".to_string(),
                }),
            )
                .into_response();
        }
    };

    let record = match &state.structuring {
        Some(client) => match client.extract(&transcription.full_text).await {
            Ok(record) => Some(record),
            Err(e) => {
                error!("Structuring failed: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to structure conversation".to_string(),
                    }),
                )
                    .into_response();
            }
        },
        None => None,
    };

    if let Some(record) = &record {
        let mut log = state.log.write().await;
        log.append(record.clone());
        if let Err(e) = state.store.save(&log).await {
            error!("Failed to persist conversation log: {}", e);
        }
        info!("Conversation appended, log now has {} records", log.len());
    }

    (
        StatusCode::OK,
        Json(StopCaptureResponse {
            record,
            transcription,
        }),
    )
        .into_response()
}

/// POST /api/recordings/abort
/// The browser reports a capture device failure; reset the session
pub async fn abort_capture(
    State(state): State<AppState>,
    Json(req): Json<AbortCaptureRequest>,
) -> impl IntoResponse {
    let mut capture = state.capture.write().await;
    capture.abort(&req.error);

    (
        StatusCode::OK,
        Json(CaptureResponse {
            status: "idle".to_string(),
            message: "Recording aborted".to_string(),
        }),
    )
}

/// GET /api/recordings/status
pub async fn capture_status(State(state): State<AppState>) -> impl IntoResponse {
    let capture = state.capture.read().await;

    Json(CaptureStatusResponse {
        recording: capture.is_recording(),
    })
}

/// GET /api/recordings/last
/// The most recent raw capture, replayed from storage
pub async fn last_capture(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.load_last_capture().await {
        Ok(Some(audio)) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, AUDIO_MIME)], audio).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No capture has been recorded yet".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to load last capture: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Conversation log
// ============================================================================

/// GET /api/conversations
pub async fn list_conversations(State(state): State<AppState>) -> impl IntoResponse {
    let log = state.log.read().await;

    (StatusCode::OK, Json(log.clone()))
}

/// POST /api/conversations
/// Append a manually entered conversation record
pub async fn append_conversation(
    State(state): State<AppState>,
    Json(record): Json<ConversationRecord>,
) -> impl IntoResponse {
    let mut log = state.log.write().await;
    log.append(record.clone());

    if let Err(e) = state.store.save(&log).await {
        error!("Failed to persist conversation log: {}", e);
    }

    info!("Manual entry appended, log now has {} records", log.len());

    (StatusCode::OK, Json(record))
}

/// DELETE /api/conversations/:index
/// User-initiated removal; 404 when the index is out of range
pub async fn remove_conversation(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let mut log = state.log.write().await;

    match log.remove(index) {
        Ok(removed) => {
            if let Err(e) = state.store.save(&log).await {
                error!("Failed to persist conversation log: {}", e);
            }
            (StatusCode::OK, Json(removed)).into_response()
        }
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// GET /api/conversations/stats
/// The dashboard stat-card numbers derived from the log
pub async fn conversation_stats(State(state): State<AppState>) -> impl IntoResponse {
    let log = state.log.read().await;

    Json(log.counts())
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
