use std::sync::Arc;

use bytes::Bytes;
use realtime_session_types::SessionRequest;

pub mod config;
pub mod consts;
mod utils;

pub use config::{Config, ConfigBuilder};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to upstream failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Mints realtime sessions on behalf of the browser.
///
/// Cloning is cheap: the connection pool and the configuration are shared.
#[derive(Clone)]
pub struct SessionClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl SessionClient {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: Config) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn payload(&self) -> SessionRequest {
        utils::build_payload(&self.config)
    }

    /// Issues one `POST /realtime/sessions` and returns the upstream body untouched.
    ///
    /// The body is checked to be JSON but never re-encoded, so key order and
    /// formatting reach the browser exactly as the upstream sent them.
    pub async fn create_session(&self) -> Result<Bytes, ClientError> {
        let response = utils::build_request(&self.http, &self.config).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        tracing::debug!("received {} byte session from upstream", body.len());
        Ok(body)
    }
}
