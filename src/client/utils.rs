use realtime_session_types::SessionRequest;
use secrecy::ExposeSecret;

use crate::client::config::Config;

pub fn build_payload(config: &Config) -> SessionRequest {
    SessionRequest::builder(config.model())
        .with_voice(config.voice().clone())
        .with_instructions(config.instructions())
        .build()
}

/// Prepares the authenticated POST; `json` sets `Content-Type: application/json`.
pub fn build_request(http: &reqwest::Client, config: &Config) -> reqwest::RequestBuilder {
    http.post(config.sessions_url())
        .bearer_auth(config.api_key().expose_secret())
        .json(&build_payload(config))
}
