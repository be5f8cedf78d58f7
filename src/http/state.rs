use crate::capture::CaptureSession;
use crate::conversation::{ConversationLog, LogStore};
use crate::structuring::StructuringClient;
use crate::transcribe::DeepgramClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The conversation log, mirrored to the store after every mutation
    pub log: Arc<RwLock<ConversationLog>>,

    /// The single capture session (one recording at a time)
    pub capture: Arc<RwLock<CaptureSession>>,

    /// Pluggable persistence backend
    pub store: Arc<dyn LogStore>,

    pub transcriber: Arc<DeepgramClient>,

    /// Absent when no structuring endpoint is configured
    pub structuring: Option<Arc<StructuringClient>>,
}

impl AppState {
    pub fn new(
        log: ConversationLog,
        store: Arc<dyn LogStore>,
        transcriber: Arc<DeepgramClient>,
        structuring: Option<Arc<StructuringClient>>,
    ) -> Self {
        Self {
            log: Arc::new(RwLock::new(log)),
            capture: Arc::new(RwLock::new(CaptureSession::new())),
            store,
            transcriber,
            structuring,
        }
    }
}
