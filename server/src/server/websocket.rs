use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;

use crate::app::SharedState;

const REPLY_CHANNEL_CAPACITY: usize = 16;

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.subscribe_ws();

    // Connection confirmation plus the current stack for late joiners
    let client_id = uuid::Uuid::new_v4().to_string();
    let welcome = json!({
        "type": "connected",
        "data": { "clientId": client_id }
    });
    let snapshot = json!({
        "type": "notification_snapshot",
        "data": state.notifier().snapshot(),
    });
    for msg in [welcome, snapshot] {
        if sender
            .send(Message::Text(msg.to_string().into()))
            .await
            .is_err()
        {
            return;
        }
    }

    tracing::info!("WebSocket client connected: {}", client_id);

    // Replies addressed to this client only
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(REPLY_CHANNEL_CAPACITY);

    // Forward broadcast messages and direct replies to this client
    let mut send_task = tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                msg = rx.recv() => match msg {
                    Ok(msg) => msg,
                    Err(_) => break,
                },
                Some(reply) = reply_rx.recv() => reply,
            };
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Receive messages from this client and handle routing
    let recv_state = state.clone();
    let cid = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    if let Some(reply) = handle_client_message(&text, &recv_state)
                        && reply_tx.send(reply).await.is_err()
                    {
                        break;
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        tracing::info!("WebSocket client disconnected: {}", cid);
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

/// Route incoming client messages. Returns a reply for the sender, if any.
fn handle_client_message(text: &str, state: &SharedState) -> Option<String> {
    let Ok(msg) = serde_json::from_str::<serde_json::Value>(text) else {
        tracing::debug!("Ignoring non-JSON WebSocket message");
        return None;
    };
    let msg_type = msg.get("type").and_then(|t| t.as_str()).unwrap_or("");

    match msg_type {
        "ping" => Some(json!({ "type": "pong" }).to_string()),
        // Toast click / close control
        "dismiss" => {
            if let Some(id) = msg.get("id").and_then(|v| v.as_str()) {
                state.notifier().dismiss(id);
            }
            None
        }
        "toggle" => {
            state.notifier().toggle();
            None
        }
        other => {
            tracing::debug!(msg_type = other, "Unhandled WebSocket message");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;
    use crate::server::test_support::{test_state, toast_ids};

    #[tokio::test(start_paused = true)]
    async fn ping_replies_to_the_sender_only() {
        let state = test_state(&[]);
        let mut others = state.subscribe_ws();

        let reply = handle_client_message(r#"{"type":"ping"}"#, &state).unwrap();
        let reply: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(reply["type"], "pong");
        assert!(matches!(others.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_the_named_toast() {
        let state = test_state(&["ALT-1", "ALT-2"]);
        state.notifier().start();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(toast_ids(&state), ["ALT-1", "ALT-2"]);

        assert!(handle_client_message(r#"{"type":"dismiss","id":"ALT-1"}"#, &state).is_none());
        assert_eq!(toast_ids(&state), ["ALT-2"]);

        // Missing or non-string ids are ignored.
        handle_client_message(r#"{"type":"dismiss"}"#, &state);
        handle_client_message(r#"{"type":"dismiss","id":2}"#, &state);
        assert_eq!(toast_ids(&state), ["ALT-2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_flips_notifications() {
        let state = test_state(&[]);
        state.notifier().start();

        assert!(handle_client_message(r#"{"type":"toggle"}"#, &state).is_none());
        assert!(!state.notifier().is_enabled());

        handle_client_message(r#"{"type":"toggle"}"#, &state);
        assert!(state.notifier().is_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_and_malformed_messages_are_ignored() {
        let state = test_state(&[]);

        assert!(handle_client_message("not json", &state).is_none());
        assert!(handle_client_message(r#"{"type":"subscribe"}"#, &state).is_none());
        assert!(handle_client_message(r#"{"id":"ALT-1"}"#, &state).is_none());
        assert!(!state.notifier().is_enabled());
    }
}
