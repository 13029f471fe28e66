//! Application Configuration Module
//!
//! Loads settings once at startup from the environment (and an optional
//! `.env` file), then lets command-line flags override where to listen.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::client::{self, consts};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Invalid log level provided for RUST_LOG: {0}")]
    InvalidLogLevel(String),
}

/// Serves the voice chat page and mints realtime sessions for it.
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Address to bind, overriding BIND_ADDRESS
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to bind, overriding BIND_ADDRESS
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory holding index.html and the static assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Holds all configuration loaded at startup.
#[derive(Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub log_level: Level,
    pub client: client::Config,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// *   `OPENAI_API_KEY`: Secret key for the upstream API. Missing is not an
    ///     error here; the caller decides whether to warn.
    /// *   `OPENAI_BASE_URL`: (Optional) Upstream API root. Defaults to "https://api.openai.com/v1".
    /// *   `BIND_ADDRESS`: (Optional) Address and port to listen on. Defaults to "127.0.0.1:8000".
    /// *   `STATIC_DIR`: (Optional) Directory with `index.html`. Defaults to "static".
    /// *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        // Ignored if not present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(log_level_str))?;

        let mut builder = client::Config::builder();
        if let Some(api_key) = lookup(consts::OPENAI_API_KEY) {
            builder = builder.with_api_key(&api_key);
        }
        if let Some(base_url) = lookup(consts::OPENAI_BASE_URL) {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(ConfigError::InvalidValue(
                    consts::OPENAI_BASE_URL.to_string(),
                    format!("'{base_url}' is not an http(s) URL"),
                ));
            }
            builder = builder.with_base_url(&base_url);
        }

        Ok(Self {
            bind_address,
            static_dir,
            log_level,
            client: builder.build(),
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(host) = cli.host {
            self.bind_address.set_ip(host);
        }
        if let Some(port) = cli.port {
            self.bind_address.set_port(port);
        }
        if let Some(static_dir) = &cli.static_dir {
            self.static_dir = static_dir.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.log_level, Level::INFO);
        assert!(!config.client.has_api_key());
        assert_eq!(
            config.client.sessions_url(),
            "https://api.openai.com/v1/realtime/sessions"
        );
    }

    #[test]
    fn reads_credential_and_overrides() {
        let config = load(&[
            ("OPENAI_API_KEY", "sk-live"),
            ("OPENAI_BASE_URL", "http://localhost:4010/v1"),
            ("BIND_ADDRESS", "0.0.0.0:3000"),
            ("STATIC_DIR", "/srv/www"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert!(config.client.has_api_key());
        assert_eq!(
            config.client.sessions_url(),
            "http://localhost:4010/v1/realtime/sessions"
        );
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = load(&[("BIND_ADDRESS", "not-an-address")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "BIND_ADDRESS"));
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = load(&[("RUST_LOG", "chatty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "chatty"));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = load(&[("OPENAI_BASE_URL", "wss://api.openai.com/v1")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "OPENAI_BASE_URL"));
    }

    #[test]
    fn cli_overrides_host_and_port() {
        let cli = Cli::parse_from(["realtime-session-proxy", "--host", "0.0.0.0", "--port", "9000"]);
        let config = load(&[]).unwrap().with_cli(&cli);
        assert_eq!(config.bind_address, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn cli_overrides_static_dir() {
        let cli = Cli::parse_from(["realtime-session-proxy", "--static-dir", "public"]);
        let config = load(&[]).unwrap().with_cli(&cli);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.bind_address.port(), 8000);
    }
}
