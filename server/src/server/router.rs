use axum::{
    Router,
    extract::State,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use super::{api, websocket};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route("/ws", get(websocket::ws_handler))
        // --- Notifications ---
        .route("/api/notifications", get(api::notifications::get_notifications))
        .route("/api/notifications/toggle", post(api::notifications::toggle_notifications))
        .route("/api/notifications/enabled", put(api::notifications::set_notifications_enabled))
        .route("/api/notifications/{id}", delete(api::notifications::dismiss_notification))
        // --- Alerts (proxied to the ward API) ---
        .route("/api/alerts/stats", get(api::alerts::get_alert_stats))
        .route("/api/alerts/{id}/acknowledge", put(api::alerts::acknowledge_alert))
        .route("/api/alerts/{id}/resolve", put(api::alerts::resolve_alert))
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler(State(state): State<SharedState>) -> axum::Json<serde_json::Value> {
    let notifier = state.notifier();
    axum::Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "notifications": {
            "enabled": notifier.is_enabled(),
            "phase": notifier.phase(),
        },
    }))
}
