use std::net::SocketAddr;
use std::sync::Arc;

use promoforge_api::config::{BlobConfig, ElevenLabsConfig, ServerConfig, ShotstackConfig};
use promoforge_api::router::build_app_router;
use promoforge_api::state::AppState;
use promoforge_elevenlabs::ElevenLabsClient;
use promoforge_scrape::SiteScraper;
use promoforge_shotstack::ShotstackClient;
use promoforge_storage::BlobStorageClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promoforge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Remote service clients ---
    // Each client is optional: a missing credential leaves the handle
    // unconfigured and the corresponding endpoints answer with a
    // configuration error instead of attempting the call.
    let shotstack = match ShotstackConfig::from_env() {
        Some(cfg) => {
            tracing::info!(base_url = %cfg.base_url, "Shotstack render client configured");
            Some(Arc::new(ShotstackClient::new(cfg.base_url, cfg.api_key)))
        }
        None => {
            tracing::warn!("SHOTSTACK_API_KEY not configured - rendering unavailable");
            None
        }
    };

    let elevenlabs = match ElevenLabsConfig::from_env() {
        Some(cfg) => Some(Arc::new(ElevenLabsClient::new(cfg.api_key))),
        None => {
            tracing::warn!("ELEVENLABS_API_KEY not configured - TTS preview unavailable");
            None
        }
    };

    let storage = match BlobConfig::from_env() {
        Some(cfg) => Some(Arc::new(BlobStorageClient::new(cfg.token))),
        None => {
            tracing::warn!("BLOB_READ_WRITE_TOKEN not configured - audio upload unavailable");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        scraper: SiteScraper::new(),
        shotstack,
        elevenlabs,
        storage,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
