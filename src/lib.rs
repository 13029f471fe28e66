use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;

pub use realtime_session_types as types;
pub use client::{ClientError, SessionClient};
pub use config::{Cli, Config, ConfigError};
pub use error::AppError;

pub const INDEX_FILE: &str = "index.html";

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    client: SessionClient,
    static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(client: SessionClient, static_dir: impl AsRef<Path>) -> Self {
        Self {
            client,
            static_dir: Arc::new(static_dir.as_ref().to_path_buf()),
        }
    }

    pub fn client(&self) -> &SessionClient {
        &self.client
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(INDEX_FILE)
    }
}

/// Builds the application router:
///
/// * `GET /` - the entry page
/// * `GET /static/*` - files under the static directory
/// * `GET /session` - an upstream realtime session
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir());

    Router::new()
        .route("/", get(handlers::index))
        .route("/session", get(handlers::create_session))
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
