use super::log::ConversationLog;
use crate::error::{Error, Result};
use crate::transcribe::AUDIO_MIME;
use async_trait::async_trait;
use base64::Engine;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

/// Log filename under the storage directory
const LOG_FILE: &str = "conversations.json";

/// Last-capture filename under the storage directory
const LAST_CAPTURE_FILE: &str = "last-capture.txt";

/// Persistence backend for the conversation log.
///
/// Injected into the application state so the storage mechanism can be
/// swapped out; the service saves the full log after every mutation and
/// loads it once at startup.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn load(&self) -> Result<ConversationLog>;

    async fn save(&self, log: &ConversationLog) -> Result<()>;

    /// Persist the most recent raw audio capture.
    async fn save_last_capture(&self, audio: &[u8]) -> Result<()>;

    /// Retrieve the most recent raw audio capture, if one was saved.
    async fn load_last_capture(&self) -> Result<Option<Vec<u8>>>;

    /// Load the log, recovering from any storage failure by resetting to
    /// an empty log. Corruption is logged, never fatal.
    async fn load_or_empty(&self) -> ConversationLog {
        match self.load().await {
            Ok(log) => log,
            Err(Error::StorageCorrupt(e)) => {
                warn!("Discarding corrupt conversation log: {}", e);
                ConversationLog::new()
            }
            Err(e) => {
                warn!("Failed to load conversation log, starting empty: {}", e);
                ConversationLog::new()
            }
        }
    }
}

/// File-backed store: one JSON array for the log, one self-describing
/// `data:` string for the last capture.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        info!("Conversation store at {:?}", dir);

        Ok(Self { dir })
    }

    fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    fn capture_path(&self) -> PathBuf {
        self.dir.join(LAST_CAPTURE_FILE)
    }

    fn capture_prefix() -> String {
        format!("data:{};base64,", AUDIO_MIME)
    }
}

#[async_trait]
impl LogStore for JsonFileStore {
    async fn load(&self) -> Result<ConversationLog> {
        let bytes = match tokio::fs::read(self.log_path()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConversationLog::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map_err(|e| Error::StorageCorrupt(e.to_string()))
    }

    async fn save(&self, log: &ConversationLog) -> Result<()> {
        let json = serde_json::to_vec_pretty(log).map_err(std::io::Error::other)?;
        tokio::fs::write(self.log_path(), json).await?;

        Ok(())
    }

    async fn save_last_capture(&self, audio: &[u8]) -> Result<()> {
        let encoded = format!(
            "{}{}",
            Self::capture_prefix(),
            base64::engine::general_purpose::STANDARD.encode(audio)
        );
        tokio::fs::write(self.capture_path(), encoded).await?;

        Ok(())
    }

    async fn load_last_capture(&self) -> Result<Option<Vec<u8>>> {
        let encoded = match tokio::fs::read_to_string(self.capture_path()).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let payload = encoded
            .strip_prefix(&Self::capture_prefix())
            .ok_or_else(|| Error::StorageCorrupt("stored capture is not a data URL".to_string()))?;

        let audio = base64::engine::general_purpose::STANDARD
            .decode(payload.trim_end())
            .map_err(|e| Error::StorageCorrupt(e.to_string()))?;

        Ok(Some(audio))
    }
}
