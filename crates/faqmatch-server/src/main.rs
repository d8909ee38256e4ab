//! Faqmatch HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use faqmatch::chat::{ChatService, JsonlChatLog};
use faqmatch::config::Config;
use faqmatch::embedding::{BertEmbedder, CachedEmbedder, EmbedderConfig};
use faqmatch::faq::DiskFaqStore;
use faqmatch::matching::FaqMatcher;
use faqmatch_server::gateway::{
    EMBEDDER_MODE_REAL, EMBEDDER_MODE_STUB, HandlerState, create_router_with_state,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        threshold = config.match_threshold,
        "Faqmatch starting"
    );

    let embedder_config = if let Some(path) = &config.model_path {
        EmbedderConfig::new(path.clone())
    } else {
        tracing::warn!("No FAQMATCH_MODEL_PATH configured, running embedder in stub mode");
        EmbedderConfig::stub()
    };
    let embedder = BertEmbedder::load(embedder_config)?;
    let embedder_mode = if embedder.is_stub() {
        EMBEDDER_MODE_STUB
    } else {
        EMBEDDER_MODE_REAL
    };
    let embedder = CachedEmbedder::new(embedder);

    std::fs::create_dir_all(&config.storage_path)?;
    let store = DiskFaqStore::new(config.storage_path.join("faqs"));
    let chat_log = JsonlChatLog::open(config.storage_path.join("chat_log.jsonl"))?;

    let matcher = FaqMatcher::new(config.match_threshold);
    let chat = Arc::new(ChatService::new(embedder, store, chat_log, matcher));

    let state = HandlerState::new(chat, config.storage_path.clone(), embedder_mode);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Faqmatch shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("FAQMATCH_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
