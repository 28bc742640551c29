//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used for every proxied backend call and the
//! backend origin it talks to. Nothing in it is mutable.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state from host configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS
    /// backend initialisation failure).
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
