//! Alert toast stack and the notification on/off switch.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use serde_json::json;

use super::{ApiResult, err_json, ok_json};
use crate::app::SharedState;

#[derive(Debug, Deserialize)]
pub struct EnabledBody {
    pub enabled: bool,
}

/// GET /api/notifications
pub async fn get_notifications(State(state): State<SharedState>) -> ApiResult {
    let snapshot = state.notifier().snapshot();
    let data = serde_json::to_value(snapshot).map_err(|e| err_json(500, &e.to_string()))?;
    Ok(ok_json(data))
}

/// DELETE /api/notifications/{id}
pub async fn dismiss_notification(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult {
    if !state.notifier().dismiss(&id) {
        return Err(err_json(404, "toast not visible"));
    }
    Ok(Json(json!({ "status": "ok", "id": id })))
}

/// POST /api/notifications/toggle
pub async fn toggle_notifications(State(state): State<SharedState>) -> ApiResult {
    let enabled = state.notifier().toggle();
    Ok(Json(json!({ "status": "ok", "enabled": enabled })))
}

/// PUT /api/notifications/enabled
pub async fn set_notifications_enabled(
    State(state): State<SharedState>,
    Json(body): Json<EnabledBody>,
) -> ApiResult {
    let changed = state.notifier().set_enabled(body.enabled);
    Ok(Json(json!({
        "status": "ok",
        "enabled": state.notifier().is_enabled(),
        "changed": changed,
    })))
}
