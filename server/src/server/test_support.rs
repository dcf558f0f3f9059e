//! Shared fixtures for handler and WebSocket tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alert_notifier::{AlertSource, Notifier, NotifierConfig};
use async_trait::async_trait;
use ward_client::{AlertRecord, WardApiClient, WardError};

use crate::app::SharedState;
use crate::config::AppConfig;

/// Returns each scripted response once, then empty lists.
#[derive(Default)]
struct SequenceSource {
    responses: Mutex<VecDeque<Vec<AlertRecord>>>,
}

#[async_trait]
impl AlertSource for SequenceSource {
    async fn active_alerts(&self, _limit: u32) -> Result<Vec<AlertRecord>, WardError> {
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

fn alert(id: &str) -> AlertRecord {
    AlertRecord {
        alert_id: Some(id.into()),
        severity: Some("critical".into()),
        message: Some("SpO2 below 88%".into()),
        patient_name: Some("Asha Rao".into()),
        ..AlertRecord::default()
    }
}

/// State whose notifier primes with nothing and then sees `ids` on its
/// first poll. The ward client points at a closed port.
pub(crate) fn test_state(ids: &[&str]) -> SharedState {
    test_state_with_client(ids, WardApiClient::new("http://127.0.0.1:9").unwrap())
}

pub(crate) fn test_state_with_client(ids: &[&str], client: WardApiClient) -> SharedState {
    let source = SequenceSource::default();
    {
        let mut responses = source.responses.lock().unwrap();
        responses.push_back(Vec::new());
        responses.push_back(ids.iter().map(|id| alert(id)).collect());
    }

    let notifier = Notifier::new(
        Arc::new(source),
        NotifierConfig {
            startup_delay: Duration::ZERO,
            toast_lifetime: Duration::from_secs(60),
            ..NotifierConfig::default()
        },
    );
    SharedState::from_parts(AppConfig::default(), client, notifier)
}

pub(crate) fn toast_ids(state: &SharedState) -> Vec<String> {
    state.notifier().toasts().into_iter().map(|t| t.id).collect()
}
