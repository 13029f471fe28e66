use realtime_session_types::Voice;
use secrecy::{ExposeSecret, SecretString};

use crate::client::consts::{BASE_URL, DEFAULT_INSTRUCTIONS, DEFAULT_MODEL, DEFAULT_VOICE, SESSIONS_PATH};

/// Settings for the upstream sessions endpoint.
///
/// Every field is fixed for the lifetime of the process; handlers only ever
/// read it.
#[derive(Debug)]
pub struct Config {
    base_url: String,
    api_key: SecretString,
    model: String,
    voice: Voice,
    instructions: String,
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.config.api_key = SecretString::from(api_key.to_string());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.config.model = model.to_string();
        self
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.config.voice = voice;
        self
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.config.instructions = instructions.to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults point at the public API with an empty credential.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_key: SecretString::from(String::new()),
            model: DEFAULT_MODEL.to_string(),
            voice: DEFAULT_VOICE,
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sessions_url(&self) -> String {
        format!("{}{}", self.base_url, SESSIONS_PATH)
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_public_sessions_endpoint() {
        let config = Config::new();
        assert_eq!(config.sessions_url(), "https://api.openai.com/v1/realtime/sessions");
        assert_eq!(config.model(), "gpt-4o-realtime-preview-2024-12-17");
        assert_eq!(config.voice(), &Voice::Verse);
        assert!(config.instructions().contains("getLatestArxivPapers"));
        assert!(!config.has_api_key());
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = Config::builder()
            .with_base_url("http://127.0.0.1:9000/v1/")
            .with_api_key("sk-test")
            .build();
        assert_eq!(config.sessions_url(), "http://127.0.0.1:9000/v1/realtime/sessions");
        assert!(config.has_api_key());
        assert_eq!(config.api_key().expose_secret(), "sk-test");
    }
}
