//! # Kibanda POS Server
//!
//! HTTP API for the cafeteria point of sale.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kibanda POS Server                               │
//! │                                                                         │
//! │  Frontend ───► HTTP (18080) ───► PosService ───► JSON files             │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                              daily report files                         │
//! │                            (rollover + export)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod clock;
mod config;
mod error;
mod handlers;
mod service;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kibanda_store::{JsonFileStore, StoreConfig};

use crate::clock::SystemClock;
use crate::config::ServerConfig;
use crate::service::PosService;
use crate::state::ServiceState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Kibanda POS server...");

    // Load configuration
    let config = ServerConfig::load().context("loading configuration")?;
    info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        "Configuration loaded"
    );

    // Open the data directory
    let store =
        JsonFileStore::new(StoreConfig::new(&config.data_dir)).context("opening data directory")?;

    // Load state; seeds the default menu on a clean first run, refuses to
    // start over a corrupt data file.
    let service = PosService::initialize(Arc::new(store), Arc::new(SystemClock))
        .context("loading POS state")?;
    info!(business_day = %service.business_day(), "POS state ready");

    let state = ServiceState::new(service);
    let app = handlers::router(state.clone());

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Kibanda POS server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // Last chance to get today's report and snapshots onto disk before the
    // process exits; without this the final trading day would only be
    // archived when the server next starts and rolls past it.
    state.with_service(|s| s.flush_current_day());
    info!("Server shutdown complete");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kibanda_server=trace` - Trace the server crate only
/// - Default: INFO level, with request traces from tower_http
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kibanda_server=debug,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
