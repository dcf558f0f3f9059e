//! Hospital operations API client library.
//!
//! Typed access to the alert endpoints of the ward dashboard backend.

pub mod api;

pub use api::{AlertQuery, AlertRecord, AlertStats, WardApiClient};

/// Unified error type for the ward-client crate.
#[derive(Debug, thiserror::Error)]
pub enum WardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ward API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}
