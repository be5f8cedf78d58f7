use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub deepgram: DeepgramConfig,
    #[serde(default)]
    pub structuring: StructuringConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Speech provider settings. Recognition parameters not listed here are
/// fixed: punctuation and diarization are always on, payloads are always
/// forwarded as `audio/webm`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeepgramConfig {
    pub api_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub model: String,
    pub language: String,
}

/// Structuring service settings. When no endpoint is configured, finished
/// recordings return the transcription only and nothing is appended to the
/// conversation log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuringConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the conversation log and the last capture blob.
    pub path: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
