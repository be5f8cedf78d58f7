use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Audio uploads can far exceed axum's 2 MB default body limit
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Transcription gateway
        .route("/api/transcribe", post(handlers::transcribe_audio))
        // Capture control
        .route("/api/recordings/start", post(handlers::start_capture))
        .route("/api/recordings/chunks", post(handlers::push_chunk))
        .route("/api/recordings/stop", post(handlers::stop_capture))
        .route("/api/recordings/abort", post(handlers::abort_capture))
        .route("/api/recordings/status", get(handlers::capture_status))
        .route("/api/recordings/last", get(handlers::last_capture))
        // Conversation log
        .route(
            "/api/conversations",
            get(handlers::list_conversations).post(handlers::append_conversation),
        )
        .route(
            "/api/conversations/stats",
            get(handlers::conversation_stats),
        )
        .route(
            "/api/conversations/:index",
            delete(handlers::remove_conversation),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Browser dashboard calls from another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
