use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::AppState;

/// Serves `index.html` from the static directory.
///
/// The file is read on every request so edits show up without a restart.
pub async fn index(State(state): State<AppState>) -> Result<Html<Vec<u8>>, AppError> {
    info!("Serving index page...");
    let page = tokio::fs::read(state.index_path()).await?;
    Ok(Html(page))
}

/// Proxies one session-creation call upstream and relays the JSON body.
pub async fn create_session(State(state): State<AppState>) -> Result<Response, AppError> {
    info!("Creating new session...");
    let session = state.client().create_session().await?;
    info!("Session created successfully!");
    Ok(([(header::CONTENT_TYPE, "application/json")], session).into_response())
}
