use serde::{Deserialize, Deserializer, Serialize};

/// Alert record as returned by `GET /api/alerts`.
///
/// The backend is loose about which fields it fills in and about their JSON
/// types, so everything is optional, scalars are read as strings, and callers
/// derive identity and defaults themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub alert_id: Option<String>,
    #[serde(default, rename = "_id", deserialize_with = "lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub triggered_rule: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rule: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// ISO string or epoch number, depending on the backend version.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

/// Strings pass through, numbers and booleans are stringified, anything else
/// (null, objects, arrays) reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Wrapper for list responses (`{ "data": [...] }`).
#[derive(Debug, Deserialize)]
pub struct AlertListResponse {
    #[serde(default)]
    pub data: Vec<AlertRecord>,
}

/// Counters from `GET /api/alerts/stats`, passed through as-is.
pub type AlertStats = serde_json::Value;

/// Query parameters for `GET /api/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQuery {
    pub status: Option<String>,
    pub severity: Option<String>,
    pub limit: Option<u32>,
}

impl AlertQuery {
    /// Active alerts, newest first, capped at `limit`.
    pub fn active(limit: u32) -> Self {
        Self {
            status: Some("active".into()),
            severity: None,
            limit: Some(limit),
        }
    }
}
