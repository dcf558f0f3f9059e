//! Ward dashboard REST API client.
//!
//! All endpoints live under a single base URL fixed when the client is built.

mod alerts;
mod request;

pub mod models;

pub use models::{AlertListResponse, AlertQuery, AlertRecord, AlertStats};

use url::Url;

use crate::WardError;

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://swasthyasetu-seven.vercel.app";

/// Ward API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct WardApiClient {
    pub(super) http: reqwest::Client,
    pub(super) base: Url,
}

impl WardApiClient {
    pub fn new(base_url: &str) -> Result<Self, WardError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Append path segments to the base URL, keeping any path prefix it has
    /// (`https://host/backend` + `["api", "alerts"]` gives
    /// `https://host/backend/api/alerts`). Segments are percent-encoded.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<Url, WardError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
