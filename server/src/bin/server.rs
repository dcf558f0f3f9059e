//! Headless server binary.
//!
//! Starts the alert notifier, the axum web server, background tasks, and
//! signal handling.

use tracing_subscriber::EnvFilter;

use ward_watch_lib::app::SharedState;
use ward_watch_lib::{background, server, shutdown};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Ward Watch (headless mode)");

    let config = ward_watch_lib::init_foundation()?;
    let state = SharedState::new(config)?;

    // Toast events -> WebSocket clients
    let s = state.clone();
    tokio::spawn(async move { background::toast_event_forward_loop(s).await });

    if state.config().notifications_enabled {
        state.notifier().start();
    } else {
        tracing::info!("Alert notifications disabled");
    }

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    tracing::info!(
        port = state.server_port(),
        "Headless server running. Press Ctrl+C to stop."
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    shutdown::graceful_shutdown(&state).await;
    let _ = server_handle.await;
    Ok(())
}
