//! Alert actions proxied to the ward API.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use ward_client::WardError;

use super::{ApiResult, err_json, ok_json};
use crate::app::SharedState;

/// Map an upstream failure to a response: client errors pass through,
/// everything else is a bad gateway.
pub(crate) fn upstream_error(e: WardError) -> (StatusCode, Json<Value>) {
    match &e {
        WardError::ApiError { status, .. } if (400..500).contains(status) => {
            err_json(*status, &e.to_string())
        }
        _ => {
            tracing::warn!(error = %e, "Ward API request failed");
            err_json(502, &e.to_string())
        }
    }
}

/// GET /api/alerts/stats
pub async fn get_alert_stats(State(state): State<SharedState>) -> ApiResult {
    let stats = state
        .client()
        .get_alert_stats()
        .await
        .map_err(upstream_error)?;
    Ok(ok_json(stats))
}

/// PUT /api/alerts/{id}/acknowledge
pub async fn acknowledge_alert(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult {
    let data = state
        .client()
        .acknowledge_alert(&id)
        .await
        .map_err(upstream_error)?;
    // A handled alert no longer needs its toast.
    let dismissed = state.notifier().dismiss(&id);
    Ok(Json(json!({ "status": "ok", "data": data, "dismissed": dismissed })))
}

/// PUT /api/alerts/{id}/resolve
pub async fn resolve_alert(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult {
    let data = state
        .client()
        .resolve_alert(&id)
        .await
        .map_err(upstream_error)?;
    let dismissed = state.notifier().dismiss(&id);
    Ok(Json(json!({ "status": "ok", "data": data, "dismissed": dismissed })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_client_errors_pass_through() {
        let (status, body) = upstream_error(WardError::ApiError {
            status: 404,
            message: "alert not found".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0["status"], "error");
    }

    #[test]
    fn upstream_server_errors_become_bad_gateway() {
        let (status, _) = upstream_error(WardError::ApiError {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
