//! Background task loops: toast event fan-out to WebSocket clients.

use alert_notifier::ToastEvent;
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;

use crate::app::SharedState;

/// WebSocket message type for a toast event.
pub fn ws_message_type(event: &ToastEvent) -> &'static str {
    match event {
        ToastEvent::Shown { .. } => "alert_toast",
        ToastEvent::Dismissed { .. } => "alert_toast_dismissed",
        ToastEvent::Toggled { .. } => "alert_notifications_toggled",
    }
}

/// Serialize a toast event into the `{ type, data }` WebSocket envelope.
pub fn ws_payload(event: &ToastEvent) -> String {
    json!({
        "type": ws_message_type(event),
        "data": event,
    })
    .to_string()
}

/// Forward notifier events to every connected WebSocket client.
pub async fn toast_event_forward_loop(state: SharedState) {
    let shutdown_token = state.shutdown_token().clone();
    let mut rx = state.notifier().subscribe();

    loop {
        let event = tokio::select! {
            _ = shutdown_token.cancelled() => break,
            event = rx.recv() => event,
        };

        match event {
            Ok(event) => {
                let _ = state.ws_sender().send(ws_payload(&event));
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Toast event forwarder lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }

    tracing::info!("Toast event forward loop stopped");
}
