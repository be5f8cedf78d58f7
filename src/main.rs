use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use warmly::conversation::{JsonFileStore, LogStore};
use warmly::http::{create_router, AppState};
use warmly::structuring::StructuringClient;
use warmly::transcribe::DeepgramClient;
use warmly::Config;

#[derive(Parser)]
#[command(name = "warmly", about = "Conversation service for the Warmly dashboard")]
struct Args {
    /// Config file path (without extension)
    #[arg(long, default_value = "config/warmly")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} starting", cfg.service.name);

    let api_key = std::env::var(&cfg.deepgram.api_key_env)
        .with_context(|| format!("{} is not set", cfg.deepgram.api_key_env))?;

    let store = Arc::new(JsonFileStore::new(&cfg.storage.path)?);
    let log = store.load_or_empty().await;
    info!("Loaded conversation log: {} records", log.len());

    let transcriber = Arc::new(DeepgramClient::new(&cfg.deepgram, api_key)?);

    let structuring = match &cfg.structuring.endpoint {
        Some(endpoint) => {
            info!("Structuring service at {}", endpoint);
            Some(Arc::new(StructuringClient::new(endpoint.clone())?))
        }
        None => {
            info!("No structuring endpoint configured; transcripts will not be structured");
            None
        }
    };

    let state = AppState::new(log, store, transcriber, structuring);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
