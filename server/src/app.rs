use std::sync::Arc;

use alert_notifier::Notifier;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use ward_client::WardApiClient;

use crate::config::AppConfig;

const WS_CHANNEL_CAPACITY: usize = 256;

/// Application shared state accessible from axum handlers and background tasks.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Broadcast channel for WebSocket messages
    ws_tx: broadcast::Sender<String>,
    config: AppConfig,
    client: WardApiClient,
    notifier: Notifier,
    /// Cancelled once on shutdown; background loops and the server watch it
    shutdown_token: CancellationToken,
}

impl SharedState {
    /// Build the API client and an idle notifier from config.
    pub fn new(config: AppConfig) -> Result<Self, anyhow::Error> {
        let client = WardApiClient::new(&config.api_base_url)?;
        let notifier = Notifier::new(Arc::new(client.clone()), config.notifier.clone());
        Ok(Self::from_parts(config, client, notifier))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(config: AppConfig, client: WardApiClient, notifier: Notifier) -> Self {
        let (ws_tx, _) = broadcast::channel(WS_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(SharedStateInner {
                ws_tx,
                config,
                client,
                notifier,
                shutdown_token: CancellationToken::new(),
            }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &WardApiClient {
        &self.inner.client
    }

    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    pub fn ws_sender(&self) -> &broadcast::Sender<String> {
        &self.inner.ws_tx
    }

    pub fn subscribe_ws(&self) -> broadcast::Receiver<String> {
        self.inner.ws_tx.subscribe()
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown_token
    }
}
