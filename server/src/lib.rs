//! Ward Watch: live alert notifications for the ward dashboard.
//!
//! Runs the alert notifier against the ward API and exposes its toast stack
//! over HTTP and WebSocket.

pub mod app;
pub mod background;
pub mod config;
pub mod server;
pub mod shutdown;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load .env and runtime config, logging any configuration warnings.
pub fn init_foundation() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();

    let config = AppConfig::load()?;
    for warning in config.warnings() {
        tracing::warn!("Config: {warning}");
    }

    tracing::info!(
        api = %config.api_base_url,
        port = config.server_port,
        notifications = config.notifications_enabled,
        "Settings loaded"
    );
    Ok(config)
}
