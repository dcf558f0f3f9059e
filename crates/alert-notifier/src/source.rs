//! Where the notifier gets its alerts from.

use async_trait::async_trait;
use ward_client::{AlertQuery, AlertRecord, WardApiClient, WardError};

/// Source of currently active alerts.
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// Fetch up to `limit` active alerts, most recent first.
    async fn active_alerts(&self, limit: u32) -> Result<Vec<AlertRecord>, WardError>;
}

#[async_trait]
impl AlertSource for WardApiClient {
    async fn active_alerts(&self, limit: u32) -> Result<Vec<AlertRecord>, WardError> {
        self.get_alerts(&AlertQuery::active(limit)).await
    }
}
