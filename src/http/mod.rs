//! HTTP API server for the browser dashboard
//!
//! This module provides the REST API the dashboard talks to:
//! - POST /api/transcribe - Transcribe one audio payload
//! - POST /api/recordings/start|chunks|stop|abort - Capture control
//! - GET /api/recordings/status - Recording state
//! - GET /api/recordings/last - Most recent capture audio
//! - GET/POST /api/conversations - Conversation log
//! - DELETE /api/conversations/:index - Remove one conversation
//! - GET /api/conversations/stats - Dashboard stat counts
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
